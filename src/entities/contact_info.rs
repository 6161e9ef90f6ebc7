use sea_orm::entity::prelude::*;

/// Singleton row; reads take the first row, writes upsert it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
