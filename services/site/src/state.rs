use std::path::PathBuf;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sea_orm::DatabaseConnection;

use kindred_session::admin::AdminGate;
use kindred_session::flash::signing_key;

use crate::config::SiteConfig;
use crate::infra::db::{DbBannerRepository, DbStatisticRepository, DbVisionMissionRepository};
use crate::infra::storage::LocalUploadStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub flash_key: Key,
    pub admin_gate: AdminGate,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &SiteConfig) -> Self {
        Self {
            db,
            static_dir: config.static_dir.clone(),
            upload_dir: config.upload_dir(),
            max_upload_bytes: config.max_upload_bytes,
            flash_key: signing_key(&config.secret_key),
            admin_gate: AdminGate::from_token(config.admin_token.clone()),
        }
    }

    pub fn banner_repo(&self) -> DbBannerRepository {
        DbBannerRepository {
            db: self.db.clone(),
        }
    }

    pub fn vision_mission_repo(&self) -> DbVisionMissionRepository {
        DbVisionMissionRepository {
            db: self.db.clone(),
        }
    }

    pub fn statistic_repo(&self) -> DbStatisticRepository {
        DbStatisticRepository {
            db: self.db.clone(),
        }
    }

    pub fn upload_store(&self) -> LocalUploadStore {
        LocalUploadStore {
            dir: self.upload_dir.clone(),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}

impl FromRef<AppState> for AdminGate {
    fn from_ref(state: &AppState) -> Self {
        state.admin_gate.clone()
    }
}
