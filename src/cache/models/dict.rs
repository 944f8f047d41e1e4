use serde::{Deserialize, Serialize};

/// 字典数据
///
/// 同一字典类型下 `dict_value` 唯一。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub dict_type: String,
    pub dict_value: String,
    pub dict_label: String,
}

impl DictEntry {
    pub fn new(
        dict_type: impl Into<String>,
        dict_value: impl Into<String>,
        dict_label: impl Into<String>,
    ) -> Self {
        Self {
            dict_type: dict_type.into(),
            dict_value: dict_value.into(),
            dict_label: dict_label.into(),
        }
    }
}
