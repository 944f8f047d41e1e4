use std::sync::Arc;

use admin_index::{
    AppState,
    cache::{MemoryCacheStore, UserSession},
    config::{Config, SysConfig},
    router::create_router,
    utils::{error_codes, generate_token},
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, String) {
    let config = Config::default();
    let state = AppState::new(
        config.clone(),
        SysConfig::default(),
        Arc::new(MemoryCacheStore::new()),
    );
    let session = UserSession::new("1", "admin", "管理员", "", None);
    state.sessions.cache_session(&session).await.unwrap();
    let (token, _) = generate_token(&session.session_id, &config).unwrap();
    (create_router(state), token)
}

fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn colors() -> Value {
    json!([
        {"dict_value": "1", "dict_label": "Red"},
        {"dict_value": "2", "dict_label": "Green"},
        {"dict_value": "3", "dict_label": "Blue"},
    ])
}

#[tokio::test]
async fn loaded_dictionary_resolves_labels_and_values() {
    let (router, token) = app().await;

    let (status, _) = send(&router, request("PUT", "/system/dict/colors", &token, Some(colors()))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&router, request("GET", "/system/dict/colors/label?value=1,3", &token, None)).await;
    assert_eq!(body["resp_data"]["label"], "Red,Blue");

    let (_, body) = send(&router, request("GET", "/system/dict/colors/label?value=9", &token, None)).await;
    assert_eq!(body["resp_data"]["label"], Value::Null);

    let (_, body) = send(&router, request("GET", "/system/dict/colors/label?value=8,9", &token, None)).await;
    assert_eq!(body["resp_data"]["label"], "");

    let (_, body) = send(
        &router,
        request("GET", "/system/dict/colors/value?label=Green%7CBlue&separator=%7C", &token, None),
    )
    .await;
    assert_eq!(body["resp_data"]["value"], "2|3");

    let (_, body) = send(&router, request("GET", "/system/dict/colors", &token, None)).await;
    assert_eq!(body["resp_data"]["cached"], true);
    assert_eq!(body["resp_data"]["entries"][2]["dict_type"], "colors");
    assert_eq!(body["resp_data"]["entries"][2]["dict_label"], "Blue");
}

#[tokio::test]
async fn clearing_evicts_every_dictionary() {
    let (router, token) = app().await;
    send(&router, request("PUT", "/system/dict/colors", &token, Some(colors()))).await;
    send(
        &router,
        request(
            "PUT",
            "/system/dict/sys_user_sex",
            &token,
            Some(json!([{"dict_value": "0", "dict_label": "男"}])),
        ),
    )
    .await;

    let (status, body) = send(&router, request("DELETE", "/system/dict", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);

    for dict_type in ["colors", "sys_user_sex"] {
        let (_, body) = send(
            &router,
            request("GET", &format!("/system/dict/{}", dict_type), &token, None),
        )
        .await;
        assert_eq!(body["resp_data"]["cached"], false);
        assert_eq!(body["resp_data"]["entries"], json!([]));
    }
}

#[tokio::test]
async fn duplicate_values_are_rejected() {
    let (router, token) = app().await;
    let entries = json!([
        {"dict_value": "1", "dict_label": "Red"},
        {"dict_value": "1", "dict_label": "Crimson"},
    ]);

    let (status, body) = send(&router, request("PUT", "/system/dict/colors", &token, Some(entries))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], error_codes::VALIDATION_ERROR);

    let (_, body) = send(&router, request("GET", "/system/dict/colors", &token, None)).await;
    assert_eq!(body["resp_data"]["cached"], false);
}

#[tokio::test]
async fn dictionary_routes_require_a_session() {
    let (router, _) = app().await;
    let (status, body) = send(&router, request("DELETE", "/system/dict", "bogus", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_message"], "未授权访问");
}
