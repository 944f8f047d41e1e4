use std::env;

use tracing::warn;

/// 侧边栏主题
pub const SIDE_THEME_KEY: &str = "sys.index.sideTheme";
/// 皮肤样式
pub const SKIN_NAME_KEY: &str = "sys.index.skinName";
/// 是否隐藏页脚
pub const IGNORE_FOOTER_KEY: &str = "sys.index.ignoreFooter";
/// 菜单导航风格
pub const MENU_STYLE_KEY: &str = "sys.index.menuStyle";
/// 初始密码修改策略，1 表示提醒修改
pub const INIT_PASSWORD_MODIFY_KEY: &str = "sys.account.initPasswordModify";
/// 密码有效天数
pub const PASSWORD_VALIDATE_DAYS_KEY: &str = "sys.account.passwordValidateDays";

const ENV_KEYS: [(&str, &str); 6] = [
    ("SYS_INDEX_SIDE_THEME", SIDE_THEME_KEY),
    ("SYS_INDEX_SKIN_NAME", SKIN_NAME_KEY),
    ("SYS_INDEX_IGNORE_FOOTER", IGNORE_FOOTER_KEY),
    ("SYS_INDEX_MENU_STYLE", MENU_STYLE_KEY),
    ("SYS_ACCOUNT_INIT_PASSWORD_MODIFY", INIT_PASSWORD_MODIFY_KEY),
    ("SYS_ACCOUNT_PASSWORD_VALIDATE_DAYS", PASSWORD_VALIDATE_DAYS_KEY),
];

/// 系统参数配置
///
/// 参数在加载时一次性解析，未设置或无法解析的值为 `None`，
/// 调用方据此降级为默认行为。
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SysConfig {
    pub side_theme: Option<String>,
    pub skin_name: Option<String>,
    pub ignore_footer: Option<bool>,
    pub menu_style: Option<String>,
    pub init_password_modify: Option<i32>,
    pub password_validate_days: Option<i64>,
}

impl SysConfig {
    /// 从参数键值对构建，未知键被忽略
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = SysConfig::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key {
                SIDE_THEME_KEY => config.side_theme = Some(value.to_string()),
                SKIN_NAME_KEY => config.skin_name = Some(value.to_string()),
                IGNORE_FOOTER_KEY => config.ignore_footer = parse_bool(key, value),
                MENU_STYLE_KEY => config.menu_style = Some(value.to_string()),
                INIT_PASSWORD_MODIFY_KEY => config.init_password_modify = parse_int(key, value),
                PASSWORD_VALIDATE_DAYS_KEY => {
                    config.password_validate_days = parse_int(key, value)
                }
                _ => {}
            }
        }
        config
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::from_pairs(
            ENV_KEYS
                .iter()
                .filter_map(|(var, key)| env::var(var).ok().map(|value| (*key, value))),
        )
    }

    /// 菜单导航风格，缺省为空串
    pub fn menu_style(&self) -> &str {
        self.menu_style.as_deref().unwrap_or("")
    }
}

fn parse_int<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring non-numeric value for {}: {:?}", key, value);
            None
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "ok" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => {
            warn!("Ignoring non-boolean value for {}: {:?}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys_once() {
        let config = SysConfig::from_pairs([
            (SIDE_THEME_KEY, "theme-dark"),
            (SKIN_NAME_KEY, "skin-blue"),
            (IGNORE_FOOTER_KEY, "true"),
            (MENU_STYLE_KEY, "topnav"),
            (INIT_PASSWORD_MODIFY_KEY, "1"),
            (PASSWORD_VALIDATE_DAYS_KEY, " 90 "),
            ("sys.unknown", "whatever"),
        ]);

        assert_eq!(config.side_theme.as_deref(), Some("theme-dark"));
        assert_eq!(config.skin_name.as_deref(), Some("skin-blue"));
        assert_eq!(config.ignore_footer, Some(true));
        assert_eq!(config.menu_style(), "topnav");
        assert_eq!(config.init_password_modify, Some(1));
        assert_eq!(config.password_validate_days, Some(90));
    }

    #[test]
    fn unparsable_numbers_are_unset() {
        let config = SysConfig::from_pairs([
            (INIT_PASSWORD_MODIFY_KEY, "yes"),
            (PASSWORD_VALIDATE_DAYS_KEY, "ninety"),
            (IGNORE_FOOTER_KEY, "maybe"),
        ]);

        assert_eq!(config.init_password_modify, None);
        assert_eq!(config.password_validate_days, None);
        assert_eq!(config.ignore_footer, None);
    }

    #[test]
    fn missing_menu_style_reads_as_empty() {
        let config = SysConfig::from_pairs([(MENU_STYLE_KEY, "   ")]);
        assert_eq!(config.menu_style, None);
        assert_eq!(config.menu_style(), "");
    }
}
