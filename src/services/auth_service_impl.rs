//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use tokio::task;

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::db::repositories::admin::hash_password;
use crate::services::auth_service::{AdminInfo, AuthError, AuthService, LoginResult};
use crate::services::token::TokenIssuer;

pub struct SeaOrmAuthService {
    store: Store,
    tokens: TokenIssuer,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, tokens: TokenIssuer, security: SecurityConfig) -> Self {
        Self {
            store,
            tokens,
            security,
        }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        // Same error whether the username exists or the password is wrong.
        let admin = self
            .store
            .verify_admin_password(username, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.tokens.issue(admin.id, admin.credential_version)?;

        Ok(LoginResult {
            token,
            admin: AdminInfo {
                id: admin.id,
                username: admin.username,
            },
        })
    }

    async fn authorize(&self, token: &str) -> Result<AdminInfo, AuthError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        let admin = self
            .store
            .find_admin_by_id(claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        // Tokens minted before the last credential change are stale.
        if claims.cv != admin.credential_version {
            return Err(AuthError::InvalidToken);
        }

        Ok(AdminInfo {
            id: admin.id,
            username: admin.username,
        })
    }

    async fn update_credentials(
        &self,
        admin_id: i32,
        new_username: &str,
        new_password: &str,
    ) -> Result<AdminInfo, AuthError> {
        if new_username.trim().len() < 3 {
            return Err(AuthError::Validation(
                "Username must be at least 3 characters".to_string(),
            ));
        }

        if new_password.len() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let security = self.security.clone();
        let password = new_password.to_string();
        let password_hash = task::spawn_blocking(move || hash_password(&password, Some(&security)))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task panicked: {e}")))??;

        let admin = self
            .store
            .replace_admin_credentials(admin_id, new_username.trim(), &password_hash)
            .await?
            .ok_or(AuthError::AdminNotFound)?;

        Ok(AdminInfo {
            id: admin.id,
            username: admin.username,
        })
    }
}
