use sea_orm::Database;
use tracing::{info, warn};

use kindred_core::config::Config;
use kindred_core::tracing::init_tracing;
use kindred_site::config::SiteConfig;
use kindred_site::router::build_router;
use kindred_site::state::AppState;
use kindred_site_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = SiteConfig::from_env();
    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set; flash cookies are signed with the built-in default");
    }

    let upload_dir = config.upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .expect("failed to create upload directory");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let state = AppState::new(db, &config);
    if state.admin_gate.is_open() {
        warn!("ADMIN_TOKEN is not set; admin routes are open");
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(upload_dir = %upload_dir.display(), "site listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
