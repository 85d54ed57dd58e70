use sea_orm_migration::prelude::*;

use kindred_site_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
