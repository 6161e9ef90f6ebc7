use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub excerpt: Option<String>,

    pub content: String,

    pub cover_image_url: Option<String>,

    /// JSON array of tag strings
    pub tags: Option<String>,

    /// Drafts stay private until flipped
    pub is_public: bool,

    /// e.g. "5 min read"
    pub read_time: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
