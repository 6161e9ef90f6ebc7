use axum::{
    Json,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::services::{AdminInfo, AuthError};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

#[derive(Deserialize)]
pub struct UpdateCredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UpdateCredentialsResponse {
    pub message: String,
    pub admin: AdminInfo,
}

/// Authenticated admin attached to the request by [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub admin_id: i32,
    pub username: String,
}

/// Gate for everything nested under `/api/admin`.
///
/// A request without a bearer token is unauthorized (401); a request with a
/// token that fails verification (bad signature, expired, or issued before
/// the last credential change) is forbidden (403).
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).ok_or(AuthError::MissingToken)?;

    let admin = state.auth_service().authorize(&token).await?;

    tracing::Span::current().record("user_id", &admin.username);

    request.extensions_mut().insert(AdminContext {
        admin_id: admin.id,
        username: admin.username,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// POST /api/auth/login
/// Authenticate with username and password, returns a bearer token on success.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state
        .auth_service()
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success(LoginResponse {
        token: result.token,
        admin: result.admin,
    })))
}

/// PUT /api/admin/credentials
/// Replace the authenticated admin's username and password. Every token
/// issued before this call stops working.
pub async fn update_credentials(
    State(state): State<Arc<AppState>>,
    axum::Extension(ctx): axum::Extension<AdminContext>,
    Json(payload): Json<UpdateCredentialsRequest>,
) -> Result<Json<ApiResponse<UpdateCredentialsResponse>>, ApiError> {
    let admin = state
        .auth_service()
        .update_credentials(ctx.admin_id, &payload.username, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success(UpdateCredentialsResponse {
        message: "Credentials updated successfully".to_string(),
        admin,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_bearer_token_missing() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc123"));
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_empty() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
