use std::sync::Arc;

use cache::{CacheStore, DictCacheOperations, SessionCacheOperations};
use config::{Config, SysConfig};

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod password;
pub mod preference;
pub mod result;
pub mod router;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sys_config: Arc<SysConfig>,
    pub dict_cache: DictCacheOperations,
    pub sessions: SessionCacheOperations,
}

impl AppState {
    pub fn new(config: Config, sys_config: SysConfig, store: Arc<dyn CacheStore>) -> Self {
        Self {
            config,
            sys_config: Arc::new(sys_config),
            dict_cache: DictCacheOperations::new(store.clone()),
            sessions: SessionCacheOperations::new(store),
        }
    }
}
