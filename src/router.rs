use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors, optional_auth_middleware},
    routes,
};

// 首页与系统页面路由
fn index_routes() -> Router<AppState> {
    Router::new()
        .route("/index", get(routes::index::index))
        .route("/lockscreen", get(routes::index::lock_screen))
        .route("/system/switchSkin", get(routes::index::switch_skin))
        .route("/system/menuStyle/{style}", get(routes::index::menu_style))
        .route("/system/main", get(routes::index::main_page))
}

// 字典缓存路由
fn dict_routes() -> Router<AppState> {
    Router::new()
        .route("/system/dict", delete(routes::dict::clear_dict_cache))
        .route(
            "/system/dict/{dict_type}",
            get(routes::dict::get_dict_cache).put(routes::dict::set_dict_cache),
        )
        .route("/system/dict/{dict_type}/label", get(routes::dict::get_dict_label))
        .route("/system/dict/{dict_type}/value", get(routes::dict::get_dict_value))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .merge(index_routes())
        .merge(dict_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // 会话超时由处理函数返回提示，而不是 401
    let session_optional_routes = Router::new()
        .route("/unlockscreen", post(routes::index::unlock_screen))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    Router::new()
        .merge(protected_routes)
        .merge(session_optional_routes)
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
