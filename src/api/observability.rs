//! Request-level logging, metrics, and response hardening.

use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::api::AppState;

/// GET /api/admin/metrics
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.prometheus_handle {
        Some(handle) => handle.render(),
        None => "Metrics not enabled or failed to initialize".to_string(),
    }
}

/// Wraps every request in a span carrying a fresh request id, emits one
/// summary event per request, and feeds the Prometheus counters. Metric
/// labels use the matched route pattern, not the raw path, so `{id}`
/// segments do not blow up cardinality.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();

    let method = req.method().clone();
    let raw_path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %raw_path,
        route = route.as_deref(),
        user_id = tracing::field::Empty,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let elapsed = started.elapsed();

        let labels = [
            ("method", method.to_string()),
            ("route", route.unwrap_or(raw_path)),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        if status.is_server_error() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "Request failed"
            );
        } else {
            info!(
                status = status.as_u16(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "Request finished"
            );
        }

        response
    }
    .instrument(span)
    .await
}

const SECURITY_HEADERS: [(&str, &str); 3] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}
