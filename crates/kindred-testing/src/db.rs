use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open a private in-memory SQLite database and apply every migration of `M`.
///
/// The pool is pinned to a single connection: each SQLite `:memory:` connection
/// is its own database.
pub async fn memory_db<M: MigratorTrait>() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("failed to open in-memory sqlite");
    M::up(&db, None).await.expect("failed to run migrations");
    db
}
