use serde::{Deserialize, Serialize};

use crate::cache::UserSession;
use crate::preference::IndexView;

/// 页面展示用的用户信息，不含密码
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: String,
    pub login_name: String,
    pub user_name: String,
    pub locked: bool,
}

impl From<&UserSession> for UserInfo {
    fn from(session: &UserSession) -> Self {
        Self {
            user_id: session.user_id.clone(),
            login_name: session.login_name.clone(),
            user_name: session.user_name.clone(),
            locked: session.locked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexViewModel {
    pub view: IndexView,
    pub user: UserInfo,
    pub side_theme: Option<String>,
    pub skin_name: Option<String>,
    pub ignore_footer: Option<bool>,
    pub copyright_year: String,
    pub demo_enabled: bool,
    pub is_default_modify_pwd: bool,
    pub is_password_expired: bool,
}

#[derive(Debug, Serialize)]
pub struct LockScreenResponse {
    pub view: &'static str,
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct UnlockScreenRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchSkinResponse {
    pub view: &'static str,
    pub skin_name: Option<String>,
    pub side_theme: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuStyleResponse {
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct MainPageResponse {
    pub view: &'static str,
    pub version: String,
}
