use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::{double_option, to_json_list};
use super::{ApiError, ApiResponse, AppState, ProjectDto, validation};
use crate::db::{NewProject, ProjectPatch};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
}

fn default_status() -> String {
    "completed".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub short_description: Option<Option<String>>,
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub demo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_url: Option<Option<String>>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

/// GET /api/projects and GET /api/admin/projects
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectDto>>>, ApiError> {
    let projects = if query.featured == Some(true) {
        state
            .store()
            .list_featured_projects()
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
    } else {
        state
            .store()
            .list_projects()
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
    };

    let dtos = projects.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProjectDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let project = state
        .store()
        .get_project(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    Ok(Json(ApiResponse::success(project.into())))
}

/// POST /api/admin/projects
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<ApiResponse<ProjectDto>>, ApiError> {
    validation::validate_required(&payload.title, "Title")?;

    let project = state
        .store()
        .create_project(NewProject {
            title: payload.title,
            description: payload.description,
            short_description: payload.short_description,
            technologies: to_json_list(&payload.technologies),
            image_url: payload.image_url,
            demo_url: payload.demo_url,
            github_url: payload.github_url,
            status: payload.status,
            featured: payload.featured,
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(project.into())))
}

/// PUT /api/admin/projects/{id}
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<ProjectDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let project = state
        .store()
        .update_project(
            id,
            ProjectPatch {
                title: payload.title,
                description: payload.description,
                short_description: payload.short_description,
                technologies: payload.technologies.map(|t| to_json_list(&t)),
                image_url: payload.image_url,
                demo_url: payload.demo_url,
                github_url: payload.github_url,
                status: payload.status,
                featured: payload.featured,
            },
        )
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Project", id))?;

    Ok(Json(ApiResponse::success(project.into())))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validation::validate_id(id)?;

    let deleted = state
        .store()
        .delete_project(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Project", id));
    }

    Ok(Json(ApiResponse::success(())))
}
