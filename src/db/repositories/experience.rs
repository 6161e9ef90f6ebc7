use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::entities::experiences;

pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<String>,
    pub technologies: Option<String>,
}

#[derive(Default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<Option<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub achievements: Option<Option<String>>,
    pub technologies: Option<Option<String>>,
}

pub struct ExperienceRepository {
    conn: DatabaseConnection,
}

impl ExperienceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<experiences::Model>> {
        experiences::Entity::find()
            .order_by_asc(experiences::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list experiences")
    }

    pub async fn create(&self, experience: NewExperience) -> Result<experiences::Model> {
        let next_order = experiences::Entity::find()
            .count(&self.conn)
            .await
            .context("Failed to count experiences")?;

        let active = experiences::ActiveModel {
            company: Set(experience.company),
            position: Set(experience.position),
            location: Set(experience.location),
            start_date: Set(experience.start_date),
            end_date: Set(experience.end_date),
            description: Set(experience.description),
            achievements: Set(experience.achievements),
            technologies: Set(experience.technologies),
            sort_order: Set(i32::try_from(next_order).unwrap_or(i32::MAX - 1) + 1),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert experience")
    }

    pub async fn update(
        &self,
        id: i32,
        patch: ExperiencePatch,
    ) -> Result<Option<experiences::Model>> {
        let Some(existing) = experiences::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query experience for update")?
        else {
            return Ok(None);
        };

        let mut active: experiences::ActiveModel = existing.clone().into();
        if let Some(company) = patch.company {
            active.company = Set(company);
        }
        if let Some(position) = patch.position {
            active.position = Set(position);
        }
        if let Some(location) = patch.location {
            active.location = Set(location);
        }
        if let Some(start_date) = patch.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = patch.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(achievements) = patch.achievements {
            active.achievements = Set(achievements);
        }
        if let Some(technologies) = patch.technologies {
            active.technologies = Set(technologies);
        }

        // Empty patch: nothing to write
        if !active.is_changed() {
            return Ok(Some(existing));
        }

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update experience")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = experiences::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete experience")?;

        Ok(result.rows_affected > 0)
    }
}
