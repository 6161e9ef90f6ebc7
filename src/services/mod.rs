pub mod auth_service;
pub use auth_service::{AdminInfo, AuthError, AuthService, LoginResult};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod token;
pub use token::{Claims, TokenIssuer};
