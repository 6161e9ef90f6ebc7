use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use super::types::double_option;
use super::{ApiError, ApiResponse, AppState, ContactInfoDto};
use crate::db::ContactInfoPatch;

#[derive(Debug, Default, Deserialize)]
pub struct UpsertContactRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub twitter: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub resume_url: Option<Option<String>>,
}

/// GET /api/contact and GET /api/admin/contact
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ContactInfoDto>>, ApiError> {
    let contact = state
        .store()
        .get_contact_info()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("Contact info not set".to_string()))?;

    Ok(Json(ApiResponse::success(contact.into())))
}

/// POST /api/admin/contact
/// Merge into the singleton row. Absent fields keep their stored values.
pub async fn upsert_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertContactRequest>,
) -> Result<Json<ApiResponse<ContactInfoDto>>, ApiError> {
    let contact = state
        .store()
        .upsert_contact_info(ContactInfoPatch {
            email: payload.email,
            phone: payload.phone,
            location: payload.location,
            linkedin: payload.linkedin,
            github: payload.github,
            twitter: payload.twitter,
            website: payload.website,
            resume_url: payload.resume_url,
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(contact.into())))
}
