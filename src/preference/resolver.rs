use axum_extra::extract::cookie::Cookie;
use serde::Serialize;

use super::cookies::RequestCookies;
use super::device::DeviceKind;

/// 导航菜单风格 Cookie 名
pub const NAV_STYLE_COOKIE: &str = "nav-style";

// 移动端固定使用左侧导航
const MOBILE_INDEX_STYLE: &str = "index";
const TOPNAV_STYLE: &str = "topnav";

/// 首页视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexView {
    #[serde(rename = "index")]
    Index,
    #[serde(rename = "index-topnav")]
    IndexTopnav,
}

impl IndexView {
    /// `topnav`（不区分大小写）选择顶部导航，其余均为默认视图
    pub fn from_style(index_style: &str) -> Self {
        if index_style.eq_ignore_ascii_case(TOPNAV_STYLE) {
            IndexView::IndexTopnav
        } else {
            IndexView::Index
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexView::Index => "index",
            IndexView::IndexTopnav => "index-topnav",
        }
    }
}

/// 菜单风格决策结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePreference {
    pub index_style: String,
    pub view: IndexView,
}

impl StylePreference {
    pub fn resolve(cookies: &RequestCookies, device: DeviceKind, menu_style: &str) -> Self {
        let index_style = resolve_index_style(cookies, device, menu_style);
        let view = IndexView::from_style(&index_style);
        Self { index_style, view }
    }
}

/// 菜单风格优先级：Cookie > 移动端默认 > 系统参数
pub fn resolve_index_style(cookies: &RequestCookies, device: DeviceKind, menu_style: &str) -> String {
    if let Some(style) = cookies.get(NAV_STYLE_COOKIE).filter(|s| !s.is_empty()) {
        return style.to_string();
    }
    if device.is_mobile() {
        return MOBILE_INDEX_STYLE.to_string();
    }
    menu_style.to_string()
}

/// 持久化菜单风格的 Cookie，下次请求生效
pub fn nav_style_cookie(style: &str) -> Cookie<'static> {
    Cookie::build((NAV_STYLE_COOKIE, style.to_string()))
        .path("/")
        .build()
}
