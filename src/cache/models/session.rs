use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户会话缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserSession {
    pub session_id: String,
    pub user_id: String,
    pub login_name: String,
    pub user_name: String,
    /// bcrypt 哈希，解锁屏幕时校验
    pub password_hash: String,
    /// 最后一次修改密码的时间，从未修改为 None
    pub pwd_update_date: Option<DateTime<Utc>>,
    /// 锁屏状态，只在会话内有效
    #[serde(default)]
    pub locked: bool,
}

impl UserSession {
    /// 登录成功后创建新会话
    pub fn new(
        user_id: impl Into<String>,
        login_name: impl Into<String>,
        user_name: impl Into<String>,
        password_hash: impl Into<String>,
        pwd_update_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            login_name: login_name.into(),
            user_name: user_name.into(),
            password_hash: password_hash.into(),
            pwd_update_date,
            locked: false,
        }
    }
}
