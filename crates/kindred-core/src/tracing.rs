use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Per-query sqlx and migration chatter stays quiet.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm_migration=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured JSON tracing on stdout. Call once at service startup.
///
/// Later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json())
        .try_init();
}

/// Compact human-readable tracing on stderr, for tools whose stdout is their output.
pub fn init_cli_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
