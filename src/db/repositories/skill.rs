use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::skills;

pub struct NewSkill {
    pub category: String,
    pub name: String,
    pub level: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

/// Partial update; `None` fields keep their stored values.
#[derive(Default)]
pub struct SkillPatch {
    pub category: Option<String>,
    pub name: Option<String>,
    pub level: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub icon_url: Option<Option<String>>,
}

pub struct SkillRepository {
    conn: DatabaseConnection,
}

impl SkillRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<skills::Model>> {
        skills::Entity::find()
            .order_by_asc(skills::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list skills")
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<skills::Model>> {
        skills::Entity::find()
            .filter(skills::Column::Category.eq(category))
            .order_by_asc(skills::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list skills by category")
    }

    pub async fn create(&self, skill: NewSkill) -> Result<skills::Model> {
        let next_order = skills::Entity::find()
            .count(&self.conn)
            .await
            .context("Failed to count skills")?;

        let active = skills::ActiveModel {
            category: Set(skill.category),
            name: Set(skill.name),
            level: Set(skill.level),
            description: Set(skill.description),
            icon_url: Set(skill.icon_url),
            sort_order: Set(i32::try_from(next_order).unwrap_or(i32::MAX - 1) + 1),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert skill")
    }

    pub async fn update(&self, id: i32, patch: SkillPatch) -> Result<Option<skills::Model>> {
        let Some(existing) = skills::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query skill for update")?
        else {
            return Ok(None);
        };

        let mut active: skills::ActiveModel = existing.clone().into();
        if let Some(category) = patch.category {
            active.category = Set(category);
        }
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(level) = patch.level {
            active.level = Set(level);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(icon_url) = patch.icon_url {
            active.icon_url = Set(icon_url);
        }

        // Empty patch: nothing to write
        if !active.is_changed() {
            return Ok(Some(existing));
        }

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update skill")?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = skills::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete skill")?;

        Ok(result.rows_affected > 0)
    }
}
