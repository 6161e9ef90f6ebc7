use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::{blog_posts, contact_info, experiences, portfolio_content, projects, skills};

/// Deserializer for nullable patch fields: an absent field stays `None`
/// (keep stored value) while an explicit `null` becomes `Some(None)`
/// (clear the column). Use with `#[serde(default, deserialize_with = ...)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Parses a JSON-array TEXT column into a string list. A null or
/// unparseable column reads as empty rather than failing the response.
pub fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Serializes a string list for storage in a TEXT column.
pub fn to_json_list(items: &[String]) -> Option<String> {
    serde_json::to_string(items).ok()
}

#[derive(Debug, Serialize)]
pub struct PortfolioContentDto {
    pub id: i32,
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub updated_at: String,
}

impl From<portfolio_content::Model> for PortfolioContentDto {
    fn from(model: portfolio_content::Model) -> Self {
        Self {
            id: model.id,
            section: model.section,
            title: model.title,
            subtitle: model.subtitle,
            content: model.content,
            image_url: model.image_url,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillDto {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub level: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
}

impl From<skills::Model> for SkillDto {
    fn from(model: skills::Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            name: model.name,
            level: model.level,
            description: model.description,
            icon_url: model.icon_url,
            sort_order: model.sort_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub status: String,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: String,
}

impl From<projects::Model> for ProjectDto {
    fn from(model: projects::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            short_description: model.short_description,
            technologies: parse_string_list(model.technologies.as_deref()),
            image_url: model.image_url,
            demo_url: model.demo_url,
            github_url: model.github_url,
            status: model.status,
            featured: model.featured,
            sort_order: model.sort_order,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExperienceDto {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub sort_order: i32,
}

impl From<experiences::Model> for ExperienceDto {
    fn from(model: experiences::Model) -> Self {
        Self {
            id: model.id,
            company: model.company,
            position: model.position,
            location: model.location,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            achievements: parse_string_list(model.achievements.as_deref()),
            technologies: parse_string_list(model.technologies.as_deref()),
            sort_order: model.sort_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub read_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<blog_posts::Model> for BlogPostDto {
    fn from(model: blog_posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            cover_image_url: model.cover_image_url,
            tags: parse_string_list(model.tags.as_deref()),
            is_public: model.is_public,
            read_time: model.read_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactInfoDto {
    pub id: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub resume_url: Option<String>,
    pub updated_at: String,
}

impl From<contact_info::Model> for ContactInfoDto {
    fn from(model: contact_info::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            phone: model.phone,
            location: model.location,
            linkedin: model.linkedin,
            github: model.github,
            twitter: model.twitter,
            website: model.website,
            resume_url: model.resume_url,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_list() {
        assert_eq!(
            parse_string_list(Some(r#"["Rust","Axum"]"#)),
            vec!["Rust".to_string(), "Axum".to_string()]
        );
        assert!(parse_string_list(None).is_empty());
        assert!(parse_string_list(Some("not json")).is_empty());
    }

    #[test]
    fn test_to_json_list_round_trip() {
        let items = vec!["a".to_string(), "b".to_string()];
        let raw = to_json_list(&items).unwrap();
        assert_eq!(parse_string_list(Some(&raw)), items);
    }
}
