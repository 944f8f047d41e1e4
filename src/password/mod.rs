// 密码策略
// 初始密码修改提醒与密码过期判断

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::SysConfig;

/// 每天的毫秒数
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 两个时间相差的整天数，按毫秒差整除计算，不按日历日
pub fn different_days_by_millisecond(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_milliseconds().abs() / MILLIS_PER_DAY
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PasswordPolicy {
    pub init_password_modify: Option<i32>,
    pub password_validate_days: Option<i64>,
}

impl PasswordPolicy {
    pub fn from_config(config: &SysConfig) -> Self {
        Self {
            init_password_modify: config.init_password_modify,
            password_validate_days: config.password_validate_days,
        }
    }

    /// 初始密码是否需要提醒修改
    pub fn init_password_is_modify(&self, pwd_update_date: Option<DateTime<Utc>>) -> bool {
        self.init_password_modify == Some(1) && pwd_update_date.is_none()
    }

    /// 密码是否过期
    pub fn password_is_expiration(&self, pwd_update_date: Option<DateTime<Utc>>) -> bool {
        self.password_is_expiration_at(pwd_update_date, Utc::now())
    }

    pub fn password_is_expiration_at(
        &self,
        pwd_update_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(validate_days) = self.password_validate_days.filter(|days| *days > 0) else {
            return false;
        };
        match pwd_update_date {
            // 从未修改过初始密码，直接提醒过期
            None => true,
            Some(updated) => different_days_by_millisecond(now, updated) > validate_days,
        }
    }
}
