//! Content tool: manage homepage content that has no admin form.
//!
//! # Usage
//!
//! ```bash
//! # Add a highlight statistic shown on the homepage
//! kindred-content stats add --label "Volunteers" --value "1,200+" --order 1
//!
//! # Inspect what is stored
//! kindred-content stats list
//! kindred-content banners list
//! ```
//!
//! Connects to `DATABASE_URL` and applies pending migrations before running.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::Database;

use kindred_core::config::Config;
use kindred_core::tracing::init_cli_tracing;
use kindred_site::config::SiteConfig;
use kindred_site_migration::{Migrator, MigratorTrait};

mod commands;

#[derive(Parser)]
#[command(name = "kindred-content", about = "Manage homepage content out of band")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight statistics
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
    /// Homepage banners
    Banners {
        #[command(subcommand)]
        action: BannersAction,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Add a statistic
    Add {
        #[arg(long)]
        label: String,
        #[arg(long)]
        value: String,
        /// Position on the homepage; lower comes first
        #[arg(long, default_value_t = 0)]
        order: i32,
        /// Only `active` statistics are shown publicly
        #[arg(long, default_value = "active")]
        status: String,
    },
    /// List every statistic, including inactive ones
    List,
}

#[derive(Subcommand)]
enum BannersAction {
    /// List every banner, including hidden ones
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_cli_tracing();
    let args = Args::parse();

    let config = SiteConfig::from_env();
    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to connect to {}", config.database_url))?;
    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Stats {
            action:
                StatsAction::Add {
                    label,
                    value,
                    order,
                    status,
                },
        } => commands::add_statistic(&db, &mut out, label, value, order, status).await,
        Command::Stats {
            action: StatsAction::List,
        } => commands::list_statistics(&db, &mut out).await,
        Command::Banners {
            action: BannersAction::List,
        } => commands::list_banners(&db, &mut out).await,
    }
}
