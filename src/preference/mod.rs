// 界面偏好模块
// 根据 Cookie、设备类型和系统参数决定首页菜单风格

pub mod cookies;
pub mod device;
pub mod resolver;

pub use cookies::RequestCookies;
pub use device::{DeviceKind, detect_device};
pub use resolver::{
    IndexView, NAV_STYLE_COOKIE, StylePreference, nav_style_cookie, resolve_index_style,
};
