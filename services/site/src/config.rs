use std::path::PathBuf;

use serde::Deserialize;

use kindred_core::config::Config;

use crate::domain::types::UPLOADS_DIR;

/// Insecure fallback used when `SECRET_KEY` is unset. Fine for local development only.
pub const DEFAULT_SECRET_KEY: &str = "kindred_secret_key";

/// Site service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// SeaORM connection URL (default `sqlite://kindred.db?mode=rwc`). Env var: `DATABASE_URL`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Secret for signing flash-notice cookies. Env var: `SECRET_KEY`.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Static file root served under `/static`; uploads go to `<static_dir>/uploads`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Body limit for admin form submissions (default 16 MiB). Env var: `MAX_UPLOAD_BYTES`.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// When set, admin routes require this token. Env var: `ADMIN_TOKEN`.
    #[serde(default)]
    pub admin_token: Option<String>,
}

impl Config for SiteConfig {}

impl SiteConfig {
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join(UPLOADS_DIR)
    }
}

fn default_database_url() -> String {
    "sqlite://kindred.db?mode=rwc".to_owned()
}

fn default_port() -> u16 {
    8000
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_owned()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}
