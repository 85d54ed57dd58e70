use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisionMission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisionMission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VisionMission::VisionDescription).text())
                    .col(ColumnDef::new(VisionMission::MissionDescription).text())
                    .col(
                        ColumnDef::new(VisionMission::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisionMission::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VisionMission {
    Table,
    Id,
    VisionDescription,
    MissionDescription,
    LastUpdated,
}
