use std::sync::Arc;

use tracing::debug;

use crate::cache::keys::session_keys::{SYS_SESSION_CACHE, session_key};
use crate::cache::models::session::UserSession;
use crate::cache::store::CacheStore;
use crate::error::CacheError;

/// 会话缓存操作
#[derive(Clone)]
pub struct SessionCacheOperations {
    store: Arc<dyn CacheStore>,
}

impl SessionCacheOperations {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// 缓存会话
    pub async fn cache_session(&self, session: &UserSession) -> Result<(), CacheError> {
        let json = serde_json::to_string(session)?;
        self.store
            .put(SYS_SESSION_CACHE, &session_key(&session.session_id), json)
            .await
    }

    /// 获取会话
    pub async fn get_session(&self, session_id: &str) -> Result<Option<UserSession>, CacheError> {
        let result = self
            .store
            .get(SYS_SESSION_CACHE, &session_key(session_id))
            .await?;

        match result {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// 设置锁屏状态，会话不存在时返回 false
    pub async fn set_locked(&self, session_id: &str, locked: bool) -> Result<bool, CacheError> {
        match self.get_session(session_id).await? {
            Some(mut session) => {
                session.locked = locked;
                self.cache_session(&session).await?;
                debug!("Session {} lock state set to {}", session_id, locked);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
