/// 字典缓存区域名
pub const SYS_DICT_CACHE: &str = "sys-dict";

/// 字典缓存键前缀
const SYS_DICT_KEY_PREFIX: &str = "sys_dict:";

/// 生成字典缓存键
pub fn dict_cache_key(dict_type: &str) -> String {
    format!("{}{}", SYS_DICT_KEY_PREFIX, dict_type)
}
