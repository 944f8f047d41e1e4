use std::env;
use std::time::Duration;

mod sys_config;

pub use sys_config::{
    IGNORE_FOOTER_KEY, INIT_PASSWORD_MODIFY_KEY, MENU_STYLE_KEY, PASSWORD_VALIDATE_DAYS_KEY,
    SIDE_THEME_KEY, SKIN_NAME_KEY, SysConfig,
};

#[derive(Debug, Clone)]
pub struct Config {
    /// 未配置时使用内存缓存
    pub redis_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub app_version: String,
    pub copyright_year: String,
    pub demo_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: None,
            jwt_secret: "change-me".to_string(),
            jwt_expiration_secs: 24 * 3600,
            server_host: "::".to_string(),
            server_port: 3000,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            copyright_year: "2026".to_string(),
            demo_enabled: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.trim_end_matches('h').parse::<u64>().ok())
            .unwrap_or(24);

        Ok(Config {
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_secs: jwt_expiration * 3600,
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            app_version: env::var("APP_VERSION").unwrap_or(defaults.app_version),
            copyright_year: env::var("COPYRIGHT_YEAR").unwrap_or(defaults.copyright_year),
            demo_enabled: env::var("DEMO_ENABLED")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }
}
