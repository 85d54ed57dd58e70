use sea_orm::entity::prelude::*;

/// Status value of statistics shown on the public homepage.
pub const STATUS_ACTIVE: &str = "active";

/// Numeric highlight shown on the homepage (e.g. "Volunteers: 1,200").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "statistic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub value: String,
    pub display_order: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
