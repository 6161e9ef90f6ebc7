use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Page section key: "hero", "about", "contact", ...
    #[sea_orm(unique)]
    pub section: String,

    pub title: Option<String>,

    pub subtitle: Option<String>,

    pub content: Option<String>,

    pub image_url: Option<String>,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
