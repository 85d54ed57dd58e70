use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Vision and mission statement. The table holds a single logical row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vision_mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub vision_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub mission_description: Option<String>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamp `last_updated` on every insert and update.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.last_updated = Set(chrono::Utc::now());
        Ok(self)
    }
}
