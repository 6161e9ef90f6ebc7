//! Domain service for admin authentication.
//!
//! Handles login, bearer-token authorization, and credential rotation.

use serde::Serialize;
use thiserror::Error;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Admin not found")]
    AdminNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Admin info DTO for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: i32,
    pub username: String,
}

/// Login result containing the bearer token and admin info.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub admin: AdminInfo,
}

/// Domain service trait for admin authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when a field is empty and
    /// [`AuthError::InvalidCredentials`] when the pair does not match.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Verifies a bearer token and returns the admin it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for expired, malformed, or
    /// stale tokens (issued before the last credential change).
    async fn authorize(&self, token: &str) -> Result<AdminInfo, AuthError>;

    /// Replaces the authenticated admin's username and password.
    ///
    /// Bumps the credential version, which invalidates every
    /// outstanding token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when the new username is shorter
    /// than 3 characters or the new password shorter than 6.
    async fn update_credentials(
        &self,
        admin_id: i32,
        new_username: &str,
        new_password: &str,
    ) -> Result<AdminInfo, AuthError>;
}
