use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::double_option;
use super::{ApiError, ApiResponse, AppState, SkillDto, validation};
use crate::db::{NewSkill, SkillPatch};

#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub category: String,
    pub name: String,
    pub level: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSkillRequest {
    pub category: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub level: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon_url: Option<Option<String>>,
}

/// GET /api/skills and GET /api/admin/skills
pub async fn list_skills(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SkillListQuery>,
) -> Result<Json<ApiResponse<Vec<SkillDto>>>, ApiError> {
    let skills = match query.category {
        Some(category) => state
            .store()
            .list_skills_by_category(&category)
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?,
        None => state
            .store()
            .list_skills()
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?,
    };

    let dtos = skills.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// POST /api/admin/skills
pub async fn create_skill(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<Json<ApiResponse<SkillDto>>, ApiError> {
    validation::validate_required(&payload.category, "Category")?;
    validation::validate_required(&payload.name, "Name")?;

    let skill = state
        .store()
        .create_skill(NewSkill {
            category: payload.category,
            name: payload.name,
            level: payload.level,
            description: payload.description,
            icon_url: payload.icon_url,
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(skill.into())))
}

/// PUT /api/admin/skills/{id}
pub async fn update_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSkillRequest>,
) -> Result<Json<ApiResponse<SkillDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let skill = state
        .store()
        .update_skill(
            id,
            SkillPatch {
                category: payload.category,
                name: payload.name,
                level: payload.level,
                description: payload.description,
                icon_url: payload.icon_url,
            },
        )
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Skill", id))?;

    Ok(Json(ApiResponse::success(skill.into())))
}

/// DELETE /api/admin/skills/{id}
pub async fn delete_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validation::validate_id(id)?;

    let deleted = state
        .store()
        .delete_skill(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Skill", id));
    }

    Ok(Json(ApiResponse::success(())))
}
