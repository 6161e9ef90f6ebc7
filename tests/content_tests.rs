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

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn admin_token(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"username": "admin", "password": "admin123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["data"]["token"].as_str().unwrap().to_string()
}

fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"));
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_seeded_portfolio_sections() {
    let app = spawn_app().await;

    let response = get(&app, "/api/portfolio/hero").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["section"], "hero");
    assert!(body["data"]["title"].as_str().is_some());

    let response = get(&app, "/api/portfolio/no-such-section").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_portfolio_upsert_merges_into_section() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/portfolio",
            &token,
            Some(json!({"section": "hero", "title": "New Title"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Absent fields keep their stored values
    let response = get(&app, "/api/portfolio/hero").await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], "New Title");
    assert_eq!(
        body["data"]["subtitle"],
        "Securing Digital Assets Through Ethical Hacking"
    );

    // An explicit null clears the column
    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/portfolio",
            &token,
            Some(json!({"section": "hero", "subtitle": null})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/portfolio/hero").await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["title"], "New Title");
    assert_eq!(body["data"]["subtitle"], Value::Null);
}

#[tokio::test]
async fn test_seeded_skills_and_category_filter() {
    let app = spawn_app().await;

    let response = get(&app, "/api/skills").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let skills = body["data"].as_array().unwrap();
    assert_eq!(skills.len(), 8);
    // Seed order survives the sort_order ordering
    assert_eq!(skills[0]["name"], "Network Security");
    assert!(skills.iter().all(|s| s["description"].as_str().is_some()));

    let response = get(&app, "/api/skills?category=tools").await;
    let body = body_json(response).await;
    let tools = body["data"].as_array().unwrap();
    assert_eq!(tools.len(), 3);
    assert!(tools.iter().all(|s| s["category"] == "tools"));
}

#[tokio::test]
async fn test_skill_crud() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/skills",
            &token,
            Some(json!({"category": "technical", "name": "Rust", "level": "advanced"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(authed(
            "PUT",
            &format!("/api/admin/skills/{id}"),
            &token,
            Some(json!({"level": "expert"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["level"], "expert");
    // Untouched fields keep their values
    assert_eq!(body["data"]["name"], "Rust");

    let response = app
        .clone()
        .oneshot(authed(
            "DELETE",
            &format!("/api/admin/skills/{id}"),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(authed(
            "DELETE",
            &format!("/api/admin/skills/{id}"),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_featured_filter_and_json_fields() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/projects",
            &token,
            Some(json!({
                "title": "Network Scanner",
                "technologies": ["Rust", "Tokio"],
                "featured": true
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["technologies"], json!(["Rust", "Tokio"]));
    assert_eq!(body["data"]["status"], "completed");

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/projects",
            &token,
            Some(json!({"title": "Side Project"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Two created plus the seeded default project
    let response = get(&app, "/api/projects").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let response = get(&app, "/api/projects?featured=true").await;
    let body = body_json(response).await;
    let featured = body["data"].as_array().unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().any(|p| p["title"] == "Network Scanner"));
    assert!(featured.iter().all(|p| p["title"] != "Side Project"));
}

#[tokio::test]
async fn test_project_missing_id_is_not_found() {
    let app = spawn_app().await;

    let response = get(&app, "/api/projects/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_experience_crud() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/experiences",
            &token,
            Some(json!({
                "company": "SecureCorp",
                "position": "Junior Pentester",
                "start_date": "2024-01",
                "achievements": ["Found 12 criticals"],
                "technologies": ["Burp Suite"]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["end_date"], Value::Null);

    let response = app
        .clone()
        .oneshot(authed(
            "PUT",
            &format!("/api/admin/experiences/{id}"),
            &token,
            Some(json!({"end_date": "2025-06"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["end_date"], "2025-06");
    assert_eq!(body["data"]["company"], "SecureCorp");

    // Created entry plus the seeded default experience
    let response = get(&app, "/api/experiences").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_blog_drafts_stay_private() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/blogs",
            &token,
            Some(json!({
                "title": "Draft Post",
                "slug": "draft-post",
                "content": "Work in progress",
                "tags": ["security"]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["is_public"], false);

    // Drafts are invisible on the public surface
    let response = get(&app, "/api/blogs").await;
    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let response = get(&app, "/api/blogs/draft-post").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // But visible on the admin surface
    let response = app
        .clone()
        .oneshot(authed("GET", "/api/admin/blogs", &token, None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Publishing flips visibility
    let response = app
        .clone()
        .oneshot(authed(
            "PUT",
            &format!("/api/admin/blogs/{id}"),
            &token,
            Some(json!({"is_public": true})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/api/blogs/draft-post").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["tags"], json!(["security"]));
}

#[tokio::test]
async fn test_duplicate_blog_slug_conflicts() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let post = json!({
        "title": "First",
        "slug": "same-slug",
        "content": "body"
    });

    let response = app
        .clone()
        .oneshot(authed("POST", "/api/admin/blogs", &token, Some(post.clone())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(authed("POST", "/api/admin/blogs", &token, Some(post)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_blog_slug_is_rejected() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/blogs",
            &token,
            Some(json!({"title": "Bad", "slug": "Has Spaces", "content": "x"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_upsert_merges() {
    let app = spawn_app().await;
    let token = admin_token(&app).await;

    // The seeded contact row is already there
    let response = get(&app, "/api/contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "contact@yourname.com");
    assert_eq!(body["data"]["github"], "https://github.com/yourusername");

    // A partial write only touches the fields it carries
    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/contact",
            &token,
            Some(json!({"email": "me@example.com"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "me@example.com");
    assert_eq!(body["data"]["github"], "https://github.com/yourusername");
    assert_eq!(body["data"]["id"], 1);

    // An explicit null clears the column
    let response = app
        .clone()
        .oneshot(authed(
            "POST",
            "/api/admin/contact",
            &token,
            Some(json!({"github": null})),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "me@example.com");
    assert_eq!(body["data"]["github"], Value::Null);
    assert_eq!(body["data"]["id"], 1);
}
