pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users;
mod m20260101_000002_create_vision_mission;
mod m20260101_000003_create_statistic;
mod m20260101_000004_create_banners;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users::Migration),
            Box::new(m20260101_000002_create_vision_mission::Migration),
            Box::new(m20260101_000003_create_statistic::Migration),
            Box::new(m20260101_000004_create_banners::Migration),
        ]
    }
}
