mod handler;
mod model;

pub use handler::{clear_dict_cache, get_dict_cache, get_dict_label, get_dict_value, set_dict_cache};
pub use model::{
    DictCacheResponse, DictEntryPayload, DictLabelQuery, DictLabelResponse,
    DictValueQuery, DictValueResponse,
};
