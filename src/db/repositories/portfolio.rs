use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::portfolio_content;

/// Patch for creating or merging a page section. `None` fields keep their
/// stored values on an existing row; `Some(None)` clears the column.
pub struct PortfolioSectionPatch {
    pub section: String,
    pub title: Option<Option<String>>,
    pub subtitle: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

pub struct PortfolioRepository {
    conn: DatabaseConnection,
}

impl PortfolioRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_section(&self, section: &str) -> Result<Option<portfolio_content::Model>> {
        portfolio_content::Entity::find()
            .filter(portfolio_content::Column::Section.eq(section))
            .one(&self.conn)
            .await
            .context("Failed to query portfolio section")
    }

    pub async fn list_all(&self) -> Result<Vec<portfolio_content::Model>> {
        portfolio_content::Entity::find()
            .order_by_asc(portfolio_content::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list portfolio content")
    }

    /// Insert the section if it does not exist yet, otherwise merge the patch
    /// into it. Sections are keyed by name, not id.
    pub async fn upsert(&self, patch: PortfolioSectionPatch) -> Result<portfolio_content::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let existing = self.get_by_section(&patch.section).await?;

        let model = if let Some(existing) = existing {
            let mut active: portfolio_content::ActiveModel = existing.into();
            if let Some(title) = patch.title {
                active.title = Set(title);
            }
            if let Some(subtitle) = patch.subtitle {
                active.subtitle = Set(subtitle);
            }
            if let Some(content) = patch.content {
                active.content = Set(content);
            }
            if let Some(image_url) = patch.image_url {
                active.image_url = Set(image_url);
            }
            active.updated_at = Set(now);
            active
                .update(&self.conn)
                .await
                .context("Failed to update portfolio section")?
        } else {
            let active = portfolio_content::ActiveModel {
                section: Set(patch.section),
                title: Set(patch.title.unwrap_or(None)),
                subtitle: Set(patch.subtitle.unwrap_or(None)),
                content: Set(patch.content.unwrap_or(None)),
                image_url: Set(patch.image_url.unwrap_or(None)),
                updated_at: Set(now),
                ..Default::default()
            };
            active
                .insert(&self.conn)
                .await
                .context("Failed to insert portfolio section")?
        };

        Ok(model)
    }
}
