use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, SeaOrmAuthService, TokenIssuer};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Self::with_store(config, store)
    }

    /// Builds state around an already-connected store.
    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let tokens = TokenIssuer::new(
            config.security.jwt_secret.clone(),
            config.security.token_ttl_hours,
        );

        let auth_service: Arc<dyn AuthService> = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            tokens,
            config.security.clone(),
        ));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            auth_service,
        })
    }
}
