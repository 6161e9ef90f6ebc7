use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::double_option;
use super::{ApiError, ApiResponse, AppState, PortfolioContentDto, validation};
use crate::db::PortfolioSectionPatch;

#[derive(Debug, Deserialize)]
pub struct UpsertSectionRequest {
    pub section: String,
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub subtitle: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

/// GET /api/portfolio/{section}
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<Json<ApiResponse<PortfolioContentDto>>, ApiError> {
    let section = validation::validate_section(&section)?;

    let content = state
        .store()
        .get_portfolio_section(section)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Section", section))?;

    Ok(Json(ApiResponse::success(content.into())))
}

/// GET /api/admin/portfolio
pub async fn list_sections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PortfolioContentDto>>>, ApiError> {
    let sections = state
        .store()
        .list_portfolio_content()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let dtos = sections.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// POST /api/admin/portfolio
/// Creates the section when new, merges into it otherwise. Absent fields
/// keep their stored values.
pub async fn upsert_section(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertSectionRequest>,
) -> Result<Json<ApiResponse<PortfolioContentDto>>, ApiError> {
    let section = validation::validate_section(&payload.section)?.to_string();

    let content = state
        .store()
        .upsert_portfolio_section(PortfolioSectionPatch {
            section,
            title: payload.title,
            subtitle: payload.subtitle,
            content: payload.content,
            image_url: payload.image_url,
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(content.into())))
}
