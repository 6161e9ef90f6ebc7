use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// "technical", "tools", or "certifications"
    pub category: String,

    pub name: String,

    /// "beginner", "intermediate", "advanced", "expert"
    pub level: Option<String>,

    pub description: Option<String>,

    pub icon_url: Option<String>,

    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
