use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub company: String,

    pub position: String,

    pub location: Option<String>,

    /// "YYYY-MM" format
    pub start_date: String,

    /// None for a current position
    pub end_date: Option<String>,

    pub description: Option<String>,

    /// JSON array of achievement bullet points
    pub achievements: Option<String>,

    /// JSON array of technology names
    pub technologies: Option<String>,

    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
