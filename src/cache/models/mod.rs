/// 缓存数据模型
/// 定义缓存数据的结构体
// 字典缓存模型
pub mod dict;

// 会话缓存模型
pub mod session;

// 重新导出常用类型
pub use dict::DictEntry;
pub use session::UserSession;
