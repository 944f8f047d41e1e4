use serde::{Deserialize, Serialize};

use crate::cache::DictEntry;

#[derive(Debug, Deserialize)]
pub struct DictEntryPayload {
    pub dict_value: String,
    pub dict_label: String,
}

#[derive(Debug, Serialize)]
pub struct DictCacheResponse {
    pub dict_type: String,
    pub cached: bool,
    pub entries: Vec<DictEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DictLabelQuery {
    pub value: String,
    pub separator: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DictLabelResponse {
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DictValueQuery {
    pub label: String,
    pub separator: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DictValueResponse {
    pub value: Option<String>,
}
