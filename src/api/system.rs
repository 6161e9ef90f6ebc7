//! System endpoints: liveness and readiness for deploy probes.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: bool,
}

/// GET /api/system/health
///
/// Reports degraded (but still 200) when the database ping fails, so the
/// process stays alive while the probe output flags the fault.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let database = state.store().ping().await.is_ok();

    Ok(Json(ApiResponse::success(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database,
    })))
}
