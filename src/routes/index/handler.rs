use axum::{
    extract::{Extension, Json, Path, State},
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info, warn};

use crate::{
    AppState,
    cache::UserSession,
    password::PasswordPolicy,
    preference::{RequestCookies, StylePreference, detect_device, nav_style_cookie},
    result::EmptyResponse,
    utils::{error_codes, error_to_api_response, success_to_api_response, verify_password},
};

use super::model::{
    IndexViewModel, LockScreenResponse, MainPageResponse, MenuStyleResponse, SwitchSkinResponse,
    UnlockScreenRequest, UserInfo,
};

/// 系统首页
#[axum::debug_handler]
pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<UserSession>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let device = detect_device(headers.get(USER_AGENT).and_then(|h| h.to_str().ok()));
    let cookies = RequestCookies::from_jar(&jar);
    let preference = StylePreference::resolve(&cookies, device, state.sys_config.menu_style());
    let policy = PasswordPolicy::from_config(&state.sys_config);

    let view_model = IndexViewModel {
        view: preference.view,
        user: UserInfo::from(&session),
        side_theme: state.sys_config.side_theme.clone(),
        skin_name: state.sys_config.skin_name.clone(),
        ignore_footer: state.sys_config.ignore_footer,
        copyright_year: state.config.copyright_year.clone(),
        demo_enabled: state.config.demo_enabled,
        is_default_modify_pwd: policy.init_password_is_modify(session.pwd_update_date),
        is_password_expired: policy.password_is_expiration(session.pwd_update_date),
    };

    (StatusCode::OK, success_to_api_response(view_model))
}

/// 锁定屏幕
#[axum::debug_handler]
pub async fn lock_screen(
    State(state): State<AppState>,
    Extension(session): Extension<UserSession>,
) -> impl IntoResponse {
    match state.sessions.set_locked(&session.session_id, true).await {
        Ok(true) => {
            info!("Screen locked for user {}", session.login_name);
            let mut user = UserInfo::from(&session);
            user.locked = true;
            (
                StatusCode::OK,
                success_to_api_response(LockScreenResponse { view: "lock", user }),
            )
        }
        Ok(false) => {
            warn!("Session {} expired before lock", session.session_id);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::SESSION_TIMEOUT,
                    "服务器超时，请重新登陆".to_string(),
                ),
            )
        }
        Err(e) => {
            error!("Failed to lock session {}: {}", session.session_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, "锁定屏幕失败".to_string()),
            )
        }
    }
}

/// 解锁屏幕
#[axum::debug_handler]
pub async fn unlock_screen(
    State(state): State<AppState>,
    session: Option<Extension<UserSession>>,
    Json(req): Json<UnlockScreenRequest>,
) -> impl IntoResponse {
    let Some(Extension(session)) = session else {
        return (
            StatusCode::OK,
            error_to_api_response::<EmptyResponse>(
                error_codes::SESSION_TIMEOUT,
                "服务器超时，请重新登陆".to_string(),
            ),
        );
    };

    match verify_password(&req.password, &session.password_hash) {
        Ok(true) => (),
        Ok(false) => {
            warn!("Unlock attempt with wrong password for {}", session.login_name);
            return (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::AUTH_FAILED,
                    "密码不正确，请重新输入。".to_string(),
                ),
            );
        }
        Err(e) => {
            error!("Password verification failed for {}: {}", session.login_name, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, "密码校验失败".to_string()),
            );
        }
    }

    match state.sessions.set_locked(&session.session_id, false).await {
        Ok(true) => (StatusCode::OK, success_to_api_response(EmptyResponse {})),
        Ok(false) => {
            warn!("Session {} expired before unlock", session.session_id);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::SESSION_TIMEOUT,
                    "服务器超时，请重新登陆".to_string(),
                ),
            )
        }
        Err(e) => {
            error!("Failed to unlock session {}: {}", session.session_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_to_api_response(error_codes::INTERNAL_ERROR, "解锁屏幕失败".to_string()),
            )
        }
    }
}

/// 切换主题
#[axum::debug_handler]
pub async fn switch_skin(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        success_to_api_response(SwitchSkinResponse {
            view: "skin",
            skin_name: state.sys_config.skin_name.clone(),
            side_theme: state.sys_config.side_theme.clone(),
        }),
    )
}

/// 切换菜单风格，写入 Cookie 后下次请求首页生效
#[axum::debug_handler]
pub async fn menu_style(jar: CookieJar, Path(style): Path<String>) -> impl IntoResponse {
    let jar = jar.add(nav_style_cookie(&style));
    (
        StatusCode::OK,
        jar,
        success_to_api_response(MenuStyleResponse { style }),
    )
}

/// 系统介绍
#[axum::debug_handler]
pub async fn main_page(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        success_to_api_response(MainPageResponse {
            view: "main",
            version: state.config.app_version.clone(),
        }),
    )
}
