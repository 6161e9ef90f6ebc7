use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::blog_posts;

pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub tags: Option<String>,
    pub is_public: bool,
    pub read_time: Option<String>,
}

#[derive(Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub cover_image_url: Option<Option<String>>,
    pub tags: Option<Option<String>>,
    pub is_public: Option<bool>,
    pub read_time: Option<Option<String>>,
}

pub struct BlogRepository {
    conn: DatabaseConnection,
}

impl BlogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All posts, drafts included. Admin view.
    pub async fn list_all(&self) -> Result<Vec<blog_posts::Model>> {
        blog_posts::Entity::find()
            .order_by_desc(blog_posts::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list blog posts")
    }

    pub async fn list_public(&self) -> Result<Vec<blog_posts::Model>> {
        blog_posts::Entity::find()
            .filter(blog_posts::Column::IsPublic.eq(true))
            .order_by_desc(blog_posts::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list public blog posts")
    }

    pub async fn get(&self, id: i32) -> Result<Option<blog_posts::Model>> {
        blog_posts::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query blog post")
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<blog_posts::Model>> {
        blog_posts::Entity::find()
            .filter(blog_posts::Column::Slug.eq(slug))
            .one(&self.conn)
            .await
            .context("Failed to query blog post by slug")
    }

    pub async fn slug_exists(&self, slug: &str, ignore_id: Option<i32>) -> Result<bool> {
        let mut query =
            blog_posts::Entity::find().filter(blog_posts::Column::Slug.eq(slug));
        if let Some(id) = ignore_id {
            query = query.filter(blog_posts::Column::Id.ne(id));
        }

        let existing = query
            .one(&self.conn)
            .await
            .context("Failed to check slug uniqueness")?;

        Ok(existing.is_some())
    }

    pub async fn create(&self, post: NewBlogPost) -> Result<blog_posts::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = blog_posts::ActiveModel {
            title: Set(post.title),
            slug: Set(post.slug),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            cover_image_url: Set(post.cover_image_url),
            tags: Set(post.tags),
            is_public: Set(post.is_public),
            read_time: Set(post.read_time),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert blog post")
    }

    pub async fn update(&self, id: i32, patch: BlogPostPatch) -> Result<Option<blog_posts::Model>> {
        let Some(existing) = blog_posts::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query blog post for update")?
        else {
            return Ok(None);
        };

        let mut active: blog_posts::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(slug) = patch.slug {
            active.slug = Set(slug);
        }
        if let Some(excerpt) = patch.excerpt {
            active.excerpt = Set(excerpt);
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }
        if let Some(cover_image_url) = patch.cover_image_url {
            active.cover_image_url = Set(cover_image_url);
        }
        if let Some(tags) = patch.tags {
            active.tags = Set(tags);
        }
        if let Some(is_public) = patch.is_public {
            active.is_public = Set(is_public);
        }
        if let Some(read_time) = patch.read_time {
            active.read_time = Set(read_time);
        }
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update blog post")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = blog_posts::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete blog post")?;

        Ok(result.rows_affected > 0)
    }
}
