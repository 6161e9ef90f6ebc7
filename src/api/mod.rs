use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

pub mod auth;
mod blogs;
mod contact;
mod error;
mod experiences;
mod observability;
mod portfolio;
mod projects;
mod skills;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn crate::services::AuthService> {
        &self.shared.auth_service
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let (assets_path, cors_origins) = {
        let config = state.config().read().await;
        (
            config.general.static_assets_path.clone(),
            config.server.cors_allowed_origins.clone(),
        )
    };

    let admin_routes = create_admin_router(state.clone());

    let api_router = Router::new()
        .route("/portfolio/{section}", get(portfolio::get_section))
        .route("/skills", get(skills::list_skills))
        .route("/projects", get(projects::list_projects))
        .route("/projects/{id}", get(projects::get_project))
        .route("/experiences", get(experiences::list_experiences))
        .route("/contact", get(contact::get_contact))
        .route("/blogs", get(blogs::list_public_posts))
        .route("/blogs/{slug}", get(blogs::get_public_post))
        .route("/auth/login", post(auth::login))
        .route("/system/health", get(system::health))
        .nest("/admin", admin_routes)
        .with_state(state.clone());

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    // SPA fallback: unknown non-API paths get index.html
    let spa = ServeDir::new(&assets_path)
        .not_found_service(ServeFile::new(format!("{assets_path}/index.html")));

    Router::new()
        .nest("/api", api_router)
        .fallback_service(spa)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_admin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(portfolio::list_sections))
        .route("/portfolio", post(portfolio::upsert_section))
        .route("/skills", get(skills::list_skills))
        .route("/skills", post(skills::create_skill))
        .route("/skills/{id}", put(skills::update_skill))
        .route("/skills/{id}", delete(skills::delete_skill))
        .route("/projects", get(projects::list_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/{id}", put(projects::update_project))
        .route("/projects/{id}", delete(projects::delete_project))
        .route("/experiences", get(experiences::list_experiences))
        .route("/experiences", post(experiences::create_experience))
        .route("/experiences/{id}", put(experiences::update_experience))
        .route("/experiences/{id}", delete(experiences::delete_experience))
        .route("/blogs", get(blogs::list_all_posts))
        .route("/blogs", post(blogs::create_post))
        .route("/blogs/{id}", get(blogs::get_post))
        .route("/blogs/{id}", put(blogs::update_post))
        .route("/blogs/{id}", delete(blogs::delete_post))
        .route("/contact", get(contact::get_contact))
        .route("/contact", post(contact::upsert_contact))
        .route("/credentials", put(auth::update_credentials))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(state, auth::require_admin))
}
