use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::keys::dict_keys::{SYS_DICT_CACHE, dict_cache_key};
use crate::cache::models::dict::DictEntry;
use crate::cache::store::CacheStore;
use crate::error::CacheError;

/// 多值字典的默认分隔符
pub const DEFAULT_SEPARATOR: &str = ",";

/// 字典缓存操作
///
/// 持有一个共享的缓存后端，可在并发请求间克隆使用。
/// 同一字典类型的并发写入以最后一次为准，缓存本身没有过期策略，
/// 由外部加载器负责与数据库保持一致。
#[derive(Clone)]
pub struct DictCacheOperations {
    store: Arc<dyn CacheStore>,
}

impl DictCacheOperations {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// 设置字典缓存，覆盖已有数据
    pub async fn set_dict_cache(
        &self,
        dict_type: &str,
        entries: &[DictEntry],
    ) -> Result<(), CacheError> {
        let json = serde_json::to_string(entries)?;
        self.store
            .put(SYS_DICT_CACHE, &dict_cache_key(dict_type), json)
            .await?;
        debug!("Cached {} entries for dict type {}", entries.len(), dict_type);
        Ok(())
    }

    /// 获取字典缓存，未命中或后端异常时返回 None
    pub async fn get_dict_cache(&self, dict_type: &str) -> Option<Vec<DictEntry>> {
        let json = match self
            .store
            .get(SYS_DICT_CACHE, &dict_cache_key(dict_type))
            .await
        {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read dict cache for {}: {}", dict_type, e);
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!("Discarding malformed dict cache for {}: {}", dict_type, e);
                None
            }
        }
    }

    /// 根据字典类型和字典值获取字典标签
    pub async fn get_dict_label(
        &self,
        dict_type: &str,
        dict_value: &str,
        separator: &str,
    ) -> Option<String> {
        let entries = self.get_dict_cache(dict_type).await?;
        lookup_label(&entries, dict_value, separator)
    }

    /// 根据字典类型和字典标签获取字典值
    pub async fn get_dict_value(
        &self,
        dict_type: &str,
        dict_label: &str,
        separator: &str,
    ) -> Option<String> {
        let entries = self.get_dict_cache(dict_type).await?;
        lookup_value(&entries, dict_label, separator)
    }

    /// 清空字典缓存
    pub async fn clear_dict_cache(&self) -> Result<(), CacheError> {
        self.store.remove_all(SYS_DICT_CACHE).await?;
        info!("Dict cache cleared");
        Ok(())
    }
}

/// 由字典值查标签，支持以分隔符连接的多个值
pub fn lookup_label(entries: &[DictEntry], dict_value: &str, separator: &str) -> Option<String> {
    lookup(entries, dict_value, separator, |e| e.dict_value.as_str(), |e| e.dict_label.as_str())
}

/// 由字典标签查值，支持以分隔符连接的多个标签
pub fn lookup_value(entries: &[DictEntry], dict_label: &str, separator: &str) -> Option<String> {
    lookup(entries, dict_label, separator, |e| e.dict_label.as_str(), |e| e.dict_value.as_str())
}

// 多值时按字典顺序输出，每个条目最多出现一次；全部未命中返回空串
fn lookup(
    entries: &[DictEntry],
    needle: &str,
    separator: &str,
    matched_on: fn(&DictEntry) -> &str,
    resolved_to: fn(&DictEntry) -> &str,
) -> Option<String> {
    if separator.is_empty() || !needle.contains(separator) {
        return entries
            .iter()
            .find(|e| matched_on(e) == needle)
            .map(|e| resolved_to(e).to_string());
    }

    let parts: Vec<&str> = needle
        .split(separator)
        .filter(|part| !part.is_empty())
        .collect();
    let resolved: Vec<&str> = entries
        .iter()
        .filter(|e| parts.contains(&matched_on(e)))
        .map(resolved_to)
        .collect();

    Some(resolved.join(separator))
}
