use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub description: Option<String>,

    pub short_description: Option<String>,

    /// JSON array of technology names, e.g. ["Nmap", "Wireshark"]
    pub technologies: Option<String>,

    pub image_url: Option<String>,

    pub demo_url: Option<String>,

    pub github_url: Option<String>,

    /// "completed", "in-progress", or "planned"
    pub status: String,

    pub featured: bool,

    pub sort_order: i32,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
