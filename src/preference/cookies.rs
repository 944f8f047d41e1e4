use std::collections::HashMap;

use axum_extra::extract::cookie::CookieJar;

/// 请求 Cookie 索引，每个请求构建一次
///
/// 名称不区分大小写，同名 Cookie 以第一个为准。
#[derive(Debug, Default, Clone)]
pub struct RequestCookies {
    values: HashMap<String, String>,
}

impl RequestCookies {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            values
                .entry(name.to_ascii_lowercase())
                .or_insert_with(|| value.into());
        }
        Self { values }
    }

    pub fn from_jar(jar: &CookieJar) -> Self {
        Self::from_pairs(jar.iter().map(|cookie| (cookie.name(), cookie.value().to_string())))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
