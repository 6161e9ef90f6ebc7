use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::{double_option, to_json_list};
use super::{ApiError, ApiResponse, AppState, ExperienceDto, validation};
use crate::db::{ExperiencePatch, NewExperience};

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateExperienceRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

/// GET /api/experiences and GET /api/admin/experiences
pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ExperienceDto>>>, ApiError> {
    let experiences = state
        .store()
        .list_experiences()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let dtos = experiences.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// POST /api/admin/experiences
pub async fn create_experience(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExperienceRequest>,
) -> Result<Json<ApiResponse<ExperienceDto>>, ApiError> {
    validation::validate_required(&payload.company, "Company")?;
    validation::validate_required(&payload.position, "Position")?;
    validation::validate_required(&payload.start_date, "Start date")?;

    let experience = state
        .store()
        .create_experience(NewExperience {
            company: payload.company,
            position: payload.position,
            location: payload.location,
            start_date: payload.start_date,
            end_date: payload.end_date,
            description: payload.description,
            achievements: to_json_list(&payload.achievements),
            technologies: to_json_list(&payload.technologies),
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(experience.into())))
}

/// PUT /api/admin/experiences/{id}
pub async fn update_experience(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateExperienceRequest>,
) -> Result<Json<ApiResponse<ExperienceDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let experience = state
        .store()
        .update_experience(
            id,
            ExperiencePatch {
                company: payload.company,
                position: payload.position,
                location: payload.location,
                start_date: payload.start_date,
                end_date: payload.end_date,
                description: payload.description,
                achievements: payload.achievements.map(|a| to_json_list(&a)),
                technologies: payload.technologies.map(|t| to_json_list(&t)),
            },
        )
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Experience", id))?;

    Ok(Json(ApiResponse::success(experience.into())))
}

/// DELETE /api/admin/experiences/{id}
pub async fn delete_experience(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validation::validate_id(id)?;

    let deleted = state
        .store()
        .delete_experience(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Experience", id));
    }

    Ok(Json(ApiResponse::success(())))
}
