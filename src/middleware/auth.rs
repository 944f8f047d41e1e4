use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::{AppState, cache::UserSession, error::AppError, utils::verify_token};

/// 由 Bearer 令牌解析当前会话
async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<UserSession> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))?;

    let claims = match verify_token(token, &state.config) {
        Ok(claims) => claims,
        Err(e) => {
            debug!("Rejected token: {}", e);
            return None;
        }
    };

    match state.sessions.get_session(&claims.sub).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Failed to load session {}: {}", claims.sub, e);
            None
        }
    }
}

/// 要求有效会话，将 `UserSession` 放入请求扩展
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match resolve_session(&state, request.headers()).await {
        Some(session) => {
            request.extensions_mut().insert(session);
            Ok(next.run(request).await)
        }
        None => Err(AppError::Unauthorized),
    }
}

/// 会话可缺省，由处理函数自行决定如何响应
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(session) = resolve_session(&state, request.headers()).await {
        request.extensions_mut().insert(session);
    }
    next.run(request).await
}
