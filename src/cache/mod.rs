// 缓存模块
// 包含缓存后端、缓存数据结构和操作逻辑

pub mod keys;
pub mod models;
pub mod operations;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use models::{DictEntry, UserSession};
pub use operations::{DEFAULT_SEPARATOR, DictCacheOperations, SessionCacheOperations};
pub use store::{CacheStore, MemoryCacheStore, RedisCacheStore};
