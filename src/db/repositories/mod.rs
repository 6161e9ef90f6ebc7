pub mod admin;
pub mod blog;
pub mod contact;
pub mod experience;
pub mod portfolio;
pub mod project;
pub mod skill;
