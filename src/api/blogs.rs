use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::types::{double_option, to_json_list};
use super::{ApiError, ApiResponse, AppState, BlogPostDto, validation};
use crate::db::{BlogPostPatch, NewBlogPost};

#[derive(Debug, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    pub read_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_image_url: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub read_time: Option<Option<String>>,
}

/// GET /api/blogs
/// Public listing; drafts never appear here.
pub async fn list_public_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BlogPostDto>>>, ApiError> {
    let posts = state
        .store()
        .list_public_blog_posts()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let dtos = posts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// GET /api/blogs/{slug}
/// A private post reads as absent, same as a missing one.
pub async fn get_public_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BlogPostDto>>, ApiError> {
    let post = state
        .store()
        .get_blog_post_by_slug(&slug)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .filter(|p| p.is_public)
        .ok_or_else(|| ApiError::not_found("Blog post", &slug))?;

    Ok(Json(ApiResponse::success(post.into())))
}

/// GET /api/admin/blogs
pub async fn list_all_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BlogPostDto>>>, ApiError> {
    let posts = state
        .store()
        .list_blog_posts()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let dtos = posts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// GET /api/admin/blogs/{id}
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BlogPostDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let post = state
        .store()
        .get_blog_post(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Blog post", id))?;

    Ok(Json(ApiResponse::success(post.into())))
}

/// POST /api/admin/blogs
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBlogPostRequest>,
) -> Result<Json<ApiResponse<BlogPostDto>>, ApiError> {
    validation::validate_required(&payload.title, "Title")?;
    validation::validate_required(&payload.content, "Content")?;
    let slug = validation::validate_slug(&payload.slug)?.to_string();

    if state
        .store()
        .blog_slug_exists(&slug, None)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
    {
        return Err(ApiError::conflict(format!(
            "A post with slug '{}' already exists",
            slug
        )));
    }

    let post = state
        .store()
        .create_blog_post(NewBlogPost {
            title: payload.title,
            slug,
            excerpt: payload.excerpt,
            content: payload.content,
            cover_image_url: payload.cover_image_url,
            tags: to_json_list(&payload.tags),
            is_public: payload.is_public,
            read_time: payload.read_time,
        })
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(post.into())))
}

/// PUT /api/admin/blogs/{id}
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> Result<Json<ApiResponse<BlogPostDto>>, ApiError> {
    let id = validation::validate_id(id)?;

    let slug = match payload.slug {
        Some(raw) => {
            let slug = validation::validate_slug(&raw)?.to_string();
            if state
                .store()
                .blog_slug_exists(&slug, Some(id))
                .await
                .map_err(|e| ApiError::internal(e.to_string()))?
            {
                return Err(ApiError::conflict(format!(
                    "A post with slug '{}' already exists",
                    slug
                )));
            }
            Some(slug)
        }
        None => None,
    };

    let post = state
        .store()
        .update_blog_post(
            id,
            BlogPostPatch {
                title: payload.title,
                slug,
                excerpt: payload.excerpt,
                content: payload.content,
                cover_image_url: payload.cover_image_url,
                tags: payload.tags.map(|t| to_json_list(&t)),
                is_public: payload.is_public,
                read_time: payload.read_time,
            },
        )
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Blog post", id))?;

    Ok(Json(ApiResponse::success(post.into())))
}

/// DELETE /api/admin/blogs/{id}
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = validation::validate_id(id)?;

    let deleted = state
        .store()
        .delete_blog_post(id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Blog post", id));
    }

    Ok(Json(ApiResponse::success(())))
}
