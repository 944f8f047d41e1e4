use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};
use tokio::sync::RwLock;

use crate::error::CacheError;

/// 缓存后端
///
/// 按区域（region）组织键值，值为 JSON 字符串。
/// 只依赖单键读写与整区清除。
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, region: &str, key: &str) -> Result<Option<String>, CacheError>;

    async fn put(&self, region: &str, key: &str, value: String) -> Result<(), CacheError>;

    async fn remove_all(&self, region: &str) -> Result<(), CacheError>;
}

/// Redis 缓存，每个区域对应一个 hash
pub struct RedisCacheStore {
    redis: Arc<RedisClient>,
}

impl RedisCacheStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, region: &str, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let result: Option<String> = conn.hget(region, key).await?;
        Ok(result)
    }

    async fn put(&self, region: &str, key: &str, value: String) -> Result<(), CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn.hset(region, key, value).await?;
        Ok(())
    }

    async fn remove_all(&self, region: &str) -> Result<(), CacheError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn.del(region).await?;
        Ok(())
    }
}

/// 进程内缓存，未配置 Redis 时使用
#[derive(Default)]
pub struct MemoryCacheStore {
    regions: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, region: &str, key: &str) -> Result<Option<String>, CacheError> {
        let regions = self.regions.read().await;
        Ok(regions.get(region).and_then(|entries| entries.get(key)).cloned())
    }

    async fn put(&self, region: &str, key: &str, value: String) -> Result<(), CacheError> {
        let mut regions = self.regions.write().await;
        regions
            .entry(region.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_all(&self, region: &str) -> Result<(), CacheError> {
        self.regions.write().await.remove(region);
        Ok(())
    }
}
