use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::projects;

pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    /// Serialized JSON array, see `api::types::to_json_list`
    pub technologies: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub status: String,
    pub featured: bool,
}

#[derive(Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub short_description: Option<Option<String>>,
    pub technologies: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub demo_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

pub struct ProjectRepository {
    conn: DatabaseConnection,
}

impl ProjectRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<projects::Model>> {
        projects::Entity::find()
            .order_by_asc(projects::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list projects")
    }

    pub async fn list_featured(&self) -> Result<Vec<projects::Model>> {
        projects::Entity::find()
            .filter(projects::Column::Featured.eq(true))
            .order_by_asc(projects::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list featured projects")
    }

    pub async fn get(&self, id: i32) -> Result<Option<projects::Model>> {
        projects::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query project")
    }

    pub async fn create(&self, project: NewProject) -> Result<projects::Model> {
        let next_order = projects::Entity::find()
            .count(&self.conn)
            .await
            .context("Failed to count projects")?;

        let active = projects::ActiveModel {
            title: Set(project.title),
            description: Set(project.description),
            short_description: Set(project.short_description),
            technologies: Set(project.technologies),
            image_url: Set(project.image_url),
            demo_url: Set(project.demo_url),
            github_url: Set(project.github_url),
            status: Set(project.status),
            featured: Set(project.featured),
            sort_order: Set(i32::try_from(next_order).unwrap_or(i32::MAX - 1) + 1),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert project")
    }

    pub async fn update(&self, id: i32, patch: ProjectPatch) -> Result<Option<projects::Model>> {
        let Some(existing) = projects::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query project for update")?
        else {
            return Ok(None);
        };

        let mut active: projects::ActiveModel = existing.clone().into();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(short_description) = patch.short_description {
            active.short_description = Set(short_description);
        }
        if let Some(technologies) = patch.technologies {
            active.technologies = Set(technologies);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(demo_url) = patch.demo_url {
            active.demo_url = Set(demo_url);
        }
        if let Some(github_url) = patch.github_url {
            active.github_url = Set(github_url);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }
        if let Some(featured) = patch.featured {
            active.featured = Set(featured);
        }

        // Empty patch: nothing to write
        if !active.is_changed() {
            return Ok(Some(existing));
        }

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update project")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = projects::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete project")?;

        Ok(result.rows_affected > 0)
    }
}
