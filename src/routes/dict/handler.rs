use std::collections::HashSet;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::{
    AppState,
    cache::{DEFAULT_SEPARATOR, DictEntry},
    error::AppError,
    result::EmptyResponse,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{
    DictCacheResponse, DictEntryPayload, DictLabelQuery, DictLabelResponse, DictValueQuery,
    DictValueResponse,
};

/// 查询字典缓存，未缓存时返回空列表
#[axum::debug_handler]
pub async fn get_dict_cache(
    State(state): State<AppState>,
    Path(dict_type): Path<String>,
) -> impl IntoResponse {
    let cached = state.dict_cache.get_dict_cache(&dict_type).await;
    (
        StatusCode::OK,
        success_to_api_response(DictCacheResponse {
            dict_type,
            cached: cached.is_some(),
            entries: cached.unwrap_or_default(),
        }),
    )
}

/// 加载字典数据到缓存
#[axum::debug_handler]
pub async fn set_dict_cache(
    State(state): State<AppState>,
    Path(dict_type): Path<String>,
    Json(req): Json<Vec<DictEntryPayload>>,
) -> Result<impl IntoResponse, AppError> {
    // 同一字典类型下字典值必须唯一
    let mut seen = HashSet::new();
    if let Some(dup) = req.iter().find(|e| !seen.insert(e.dict_value.as_str())) {
        return Ok((
            StatusCode::BAD_REQUEST,
            error_to_api_response::<EmptyResponse>(
                error_codes::VALIDATION_ERROR,
                format!("字典值重复: {}", dup.dict_value),
            ),
        ));
    }

    let entries: Vec<DictEntry> = req
        .into_iter()
        .map(|e| DictEntry::new(dict_type.as_str(), e.dict_value, e.dict_label))
        .collect();

    state
        .dict_cache
        .set_dict_cache(&dict_type, &entries)
        .await
        .map_err(|e| {
            error!("Failed to cache dict {}: {}", dict_type, e);
            AppError::FailedToStoreDict
        })?;

    Ok((StatusCode::OK, success_to_api_response(EmptyResponse {})))
}

/// 根据字典值获取字典标签
#[axum::debug_handler]
pub async fn get_dict_label(
    State(state): State<AppState>,
    Path(dict_type): Path<String>,
    Query(query): Query<DictLabelQuery>,
) -> impl IntoResponse {
    let separator = query.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
    let label = state
        .dict_cache
        .get_dict_label(&dict_type, &query.value, separator)
        .await;
    (StatusCode::OK, success_to_api_response(DictLabelResponse { label }))
}

/// 根据字典标签获取字典值
#[axum::debug_handler]
pub async fn get_dict_value(
    State(state): State<AppState>,
    Path(dict_type): Path<String>,
    Query(query): Query<DictValueQuery>,
) -> impl IntoResponse {
    let separator = query.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
    let value = state
        .dict_cache
        .get_dict_value(&dict_type, &query.label, separator)
        .await;
    (StatusCode::OK, success_to_api_response(DictValueResponse { value }))
}

/// 清空字典缓存
#[axum::debug_handler]
pub async fn clear_dict_cache(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.dict_cache.clear_dict_cache().await.map_err(|e| {
        error!("Failed to clear dict cache: {}", e);
        AppError::FailedToClearDict
    })?;

    Ok((StatusCode::OK, success_to_api_response(EmptyResponse {})))
}
