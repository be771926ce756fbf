use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{ProgressStore, RevokedTokenStore, UserStore};
use crate::services::{HashmapProgressStore, HashmapUserStore, TokenService};
use crate::utils::{Config, ConfigError};

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type ProgressStoreType = Arc<RwLock<dyn ProgressStore>>;
pub type RevokedTokenStoreType = Arc<RwLock<dyn RevokedTokenStore>>;
pub type TokenServiceType = Arc<TokenService>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub progress_store: ProgressStoreType,
    pub token_service: TokenServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        progress_store: ProgressStoreType,
        token_service: TokenServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            progress_store,
            token_service,
            config,
        }
    }

    /// State backed entirely by the in-memory stores.
    pub fn in_memory(config: Config) -> Result<Self, ConfigError> {
        let config = Arc::new(config);
        let token_service = Arc::new(TokenService::new(config.clone())?);
        Ok(Self::new(
            Arc::new(RwLock::new(HashmapUserStore::default())),
            Arc::new(RwLock::new(HashmapProgressStore::default())),
            token_service,
            config,
        ))
    }
}
