use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistic::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statistic::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Statistic::Label).string_len(100).not_null())
                    .col(ColumnDef::new(Statistic::Value).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Statistic::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Statistic::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Statistic::Table)
                    .col(Statistic::Status)
                    .col(Statistic::DisplayOrder)
                    .name("idx_statistic_status_display_order")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistic::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Statistic {
    Table,
    Id,
    Label,
    Value,
    DisplayOrder,
    Status,
}
