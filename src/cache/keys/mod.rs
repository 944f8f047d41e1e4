/// 缓存键模块
/// 提供缓存区域名与缓存键生成函数

// 字典缓存键模块
pub mod dict_keys;

// 会话缓存键模块
pub mod session_keys;

// 重新导出常用的键生成函数
pub use dict_keys::{SYS_DICT_CACHE, dict_cache_key};
pub use session_keys::{SYS_SESSION_CACHE, session_key};
