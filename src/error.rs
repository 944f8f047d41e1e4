use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug)]
pub enum AppError {
    Unauthorized = 1,
    FailedToStoreDict,
    FailedToClearDict,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "未授权访问".into()),
            AppError::FailedToStoreDict => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "存储字典失败".to_string(),
            ),
            AppError::FailedToClearDict => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "清空字典缓存失败".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}

/// 缓存后端错误
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}
