use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::contact_info;

/// Patch for the contact row. `None` fields keep their stored values;
/// `Some(None)` clears the column.
#[derive(Default)]
pub struct ContactInfoPatch {
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub linkedin: Option<Option<String>>,
    pub github: Option<Option<String>>,
    pub twitter: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub resume_url: Option<Option<String>>,
}

pub struct ContactRepository {
    conn: DatabaseConnection,
}

impl ContactRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self) -> Result<Option<contact_info::Model>> {
        contact_info::Entity::find()
            .one(&self.conn)
            .await
            .context("Failed to query contact info")
    }

    /// Merges the patch into the single contact row, creating it on first
    /// write.
    pub async fn upsert(&self, patch: ContactInfoPatch) -> Result<contact_info::Model> {
        let now = chrono::Utc::now().to_rfc3339();

        let existing = contact_info::Entity::find()
            .one(&self.conn)
            .await
            .context("Failed to query contact info for upsert")?;

        if let Some(existing) = existing {
            let mut active: contact_info::ActiveModel = existing.into();
            if let Some(email) = patch.email {
                active.email = Set(email);
            }
            if let Some(phone) = patch.phone {
                active.phone = Set(phone);
            }
            if let Some(location) = patch.location {
                active.location = Set(location);
            }
            if let Some(linkedin) = patch.linkedin {
                active.linkedin = Set(linkedin);
            }
            if let Some(github) = patch.github {
                active.github = Set(github);
            }
            if let Some(twitter) = patch.twitter {
                active.twitter = Set(twitter);
            }
            if let Some(website) = patch.website {
                active.website = Set(website);
            }
            if let Some(resume_url) = patch.resume_url {
                active.resume_url = Set(resume_url);
            }
            active.updated_at = Set(now);

            active
                .update(&self.conn)
                .await
                .context("Failed to update contact info")
        } else {
            let active = contact_info::ActiveModel {
                email: Set(patch.email.unwrap_or(None)),
                phone: Set(patch.phone.unwrap_or(None)),
                location: Set(patch.location.unwrap_or(None)),
                linkedin: Set(patch.linkedin.unwrap_or(None)),
                github: Set(patch.github.unwrap_or(None)),
                twitter: Set(patch.twitter.unwrap_or(None)),
                website: Set(patch.website.unwrap_or(None)),
                resume_url: Set(patch.resume_url.unwrap_or(None)),
                updated_at: Set(now),
                ..Default::default()
            };

            active
                .insert(&self.conn)
                .await
                .context("Failed to insert contact info")
        }
    }
}
