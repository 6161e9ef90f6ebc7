use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::admins;

/// Admin identity returned from the repository (no password hash).
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub credential_version: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<admins::Model> for Admin {
    fn from(model: admins::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            credential_version: model.credential_version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub struct AdminRepository {
    conn: DatabaseConnection,
}

impl AdminRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Case-sensitive exact match on username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Admin>> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query admin by username")?;

        Ok(admin.map(Admin::from))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>> {
        let admin = admins::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query admin by id")?;

        Ok(admin.map(Admin::from))
    }

    /// Verify a password against the stored hash.
    /// Returns the identity on success, `None` when the username is unknown
    /// or the password does not match (the caller cannot tell which).
    /// Note: Argon2 verification is CPU-bound and runs in `spawn_blocking`
    /// so it does not stall the async runtime.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<Option<Admin>> {
        let admin = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query admin for password verification")?;

        let Some(admin) = admin else {
            return Ok(None);
        };

        let password_hash = admin.password_hash.clone();
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

            let argon2 = Argon2::default();
            Ok::<bool, anyhow::Error>(
                argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("Password verification task panicked")??;

        Ok(is_valid.then(|| Admin::from(admin)))
    }

    /// Atomically replace username and password hash for an existing identity.
    /// Refreshes `updated_at` and bumps `credential_version`; the caller is
    /// responsible for hashing, this never sees a plaintext password.
    pub async fn replace_credentials(
        &self,
        id: i32,
        new_username: &str,
        new_password_hash: &str,
    ) -> Result<Option<Admin>> {
        let Some(admin) = admins::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query admin for credential update")?
        else {
            return Ok(None);
        };

        let version = admin.credential_version + 1;
        let now = chrono::Utc::now().to_rfc3339();

        let mut active: admins::ActiveModel = admin.into();
        active.username = Set(new_username.to_string());
        active.password_hash = Set(new_password_hash.to_string());
        active.credential_version = Set(version);
        active.updated_at = Set(now);

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update admin credentials")?;

        Ok(Some(Admin::from(updated)))
    }
}

/// Hash a password using Argon2id with a fresh random salt.
/// With `config`, uses the tuned cost params; otherwise library defaults.
pub fn hash_password(password: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}
