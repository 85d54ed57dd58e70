use std::io::Write;

use anyhow::Result;
use sea_orm::DatabaseConnection;
use tracing::info;

use kindred_site::domain::types::{Banner, Statistic};
use kindred_site::infra::db::{DbBannerRepository, DbStatisticRepository};
use kindred_site::usecase::banner::ListBannersUseCase;
use kindred_site::usecase::statistic::{
    CreateStatisticInput, CreateStatisticUseCase, ListStatisticsUseCase,
};

pub async fn add_statistic(
    db: &DatabaseConnection,
    out: &mut impl Write,
    label: String,
    value: String,
    order: i32,
    status: String,
) -> Result<()> {
    let usecase = CreateStatisticUseCase {
        repo: DbStatisticRepository { db: db.clone() },
    };
    let created = usecase
        .execute(CreateStatisticInput {
            label,
            value,
            display_order: order,
            status: Some(status),
        })
        .await?;
    info!(id = created.id, "statistic added");
    write_statistic(out, &created)?;
    Ok(())
}

pub async fn list_statistics(db: &DatabaseConnection, out: &mut impl Write) -> Result<()> {
    let usecase = ListStatisticsUseCase {
        repo: DbStatisticRepository { db: db.clone() },
    };
    let stats = usecase.execute().await?;
    if stats.is_empty() {
        writeln!(out, "No statistics.")?;
    }
    for stat in &stats {
        write_statistic(out, stat)?;
    }
    Ok(())
}

pub async fn list_banners(db: &DatabaseConnection, out: &mut impl Write) -> Result<()> {
    let usecase = ListBannersUseCase {
        repo: DbBannerRepository { db: db.clone() },
    };
    let banners = usecase.execute().await?;
    if banners.is_empty() {
        writeln!(out, "No banners.")?;
    }
    for banner in &banners {
        write_banner(out, banner)?;
    }
    Ok(())
}

fn write_statistic(out: &mut impl Write, stat: &Statistic) -> std::io::Result<()> {
    writeln!(
        out,
        "#{:<4} order={:<3} {:<8} {} = {}",
        stat.id, stat.display_order, stat.status, stat.label, stat.value
    )
}

fn write_banner(out: &mut impl Write, banner: &Banner) -> std::io::Result<()> {
    let visibility = if banner.is_shown { "shown" } else { "hidden" };
    writeln!(
        out,
        "#{:<4} order={:<3} {:<8} {} ({})",
        banner.id, banner.display_order, visibility, banner.image_url, banner.title
    )
}
