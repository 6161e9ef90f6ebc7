use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use vitrine::config::Config;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // In-memory SQLite is per-connection; keep the pool at one.
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    config.security.jwt_secret = "test-secret-key-integration".to_string();

    let state = vitrine::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    vitrine::api::router(state).await
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"username": username, "password": password}),
        ))
        .await
        .unwrap()
}

async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let response = login(app, username, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/blogs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/blogs")
                .header("Authorization", "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_with_empty_fields_is_rejected() {
    let app = spawn_app().await;

    let response = login(&app, "", "admin123").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = login(&app, "admin", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = spawn_app().await;

    let response = login(&app, "no-such-user", "admin123").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = body_json(response).await;

    let response = login(&app, "admin", "wrong-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(response).await;

    // Responses must not reveal whether the username exists.
    assert_eq!(unknown_user["error"], wrong_password["error"]);
}

#[tokio::test]
async fn test_login_with_seeded_admin() {
    let app = spawn_app().await;

    let response = login(&app, "admin", "admin123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["data"]["admin"]["username"], "admin");
    assert!(body["data"]["admin"]["id"].as_i64().is_some());
    // The password hash never appears in a response.
    assert!(body["data"]["admin"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_token_grants_admin_access() {
    let app = spawn_app().await;
    let token = login_token(&app, "admin", "admin123").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/blogs")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_credential_update_validation() {
    let app = spawn_app().await;
    let token = login_token(&app, "admin", "admin123").await;

    // Username too short
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/admin/credentials",
            &token,
            json!({"username": "ab", "password": "longenough"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Password too short
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/admin/credentials",
            &token,
            json!({"username": "admin2", "password": "12345"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Old credentials still work after rejected updates
    let response = login(&app, "admin", "admin123").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_credential_rotation_end_to_end() {
    let app = spawn_app().await;
    let token = login_token(&app, "admin", "admin123").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/admin/credentials",
            &token,
            json!({"username": "admin2", "password": "newpass1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["admin"]["username"], "admin2");
    assert!(body["data"]["message"].as_str().is_some());

    // Old credentials no longer authenticate
    let response = login(&app, "admin", "admin123").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // New credentials do
    let response = login(&app, "admin2", "newpass1").await;
    assert_eq!(response.status(), StatusCode::OK);

    // The token issued before the rotation is stale now
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/blogs")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A freshly issued token works
    let new_token = login_token(&app, "admin2", "newpass1").await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/blogs")
                .header("Authorization", format!("Bearer {new_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/system/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], true);
}

#[tokio::test]
async fn test_metrics_are_gated() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
