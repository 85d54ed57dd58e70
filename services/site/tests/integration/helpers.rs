use axum_test::TestServer;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use kindred_site::config::{DEFAULT_SECRET_KEY, SiteConfig};
use kindred_site::domain::repository::{BannerRepository, VisionMissionRepository};
use kindred_site::domain::types::{Banner, VisionMission};
use kindred_site::router::build_router;
use kindred_site::state::AppState;
use kindred_site::usecase::statistic::{CreateStatisticInput, CreateStatisticUseCase};
use kindred_site_migration::Migrator;
use kindred_site_schema::{banners, vision_mission};
use kindred_testing::db::memory_db;
use kindred_testing::uploads::TempStatic;

pub const HOME_MANAGER: &str = "/admin/home-manager";

// ── TestApp ──────────────────────────────────────────────────────────────────

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub files: TempStatic,
}

pub async fn spawn_app() -> TestApp {
    spawn_with(None).await
}

pub async fn spawn_app_with_admin_token(token: &str) -> TestApp {
    spawn_with(Some(token.to_owned())).await
}

async fn spawn_with(admin_token: Option<String>) -> TestApp {
    let db = memory_db::<Migrator>().await;
    let files = TempStatic::new();
    let config = test_config(&files, admin_token);
    let state = AppState::new(db, &config);
    let server = TestServer::builder()
        .save_cookies()
        .build(build_router(state.clone()))
        .expect("failed to start test server");
    TestApp {
        server,
        state,
        files,
    }
}

fn test_config(files: &TempStatic, admin_token: Option<String>) -> SiteConfig {
    SiteConfig {
        database_url: "sqlite::memory:".to_owned(),
        port: 0,
        secret_key: DEFAULT_SECRET_KEY.to_owned(),
        static_dir: files.static_dir().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        admin_token,
    }
}

impl TestApp {
    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }

    pub async fn all_banners(&self) -> Vec<Banner> {
        self.state.banner_repo().list_all().await.unwrap()
    }

    pub async fn vision_mission(&self) -> Option<VisionMission> {
        self.state.vision_mission_repo().first().await.unwrap()
    }

    pub async fn vision_mission_rows(&self) -> u64 {
        vision_mission::Entity::find()
            .count(self.db())
            .await
            .unwrap()
    }

    pub async fn add_statistic(&self, label: &str, value: &str, order: i32, status: &str) {
        let usecase = CreateStatisticUseCase {
            repo: self.state.statistic_repo(),
        };
        usecase
            .execute(CreateStatisticInput {
                label: label.to_owned(),
                value: value.to_owned(),
                display_order: order,
                status: Some(status.to_owned()),
            })
            .await
            .unwrap();
    }

    pub async fn set_banner_order(&self, id: i32, display_order: i32) {
        banners::ActiveModel {
            id: Set(id),
            display_order: Set(display_order),
            ..Default::default()
        }
        .update(self.db())
        .await
        .unwrap();
    }

    pub async fn hide_banner(&self, id: i32) {
        banners::ActiveModel {
            id: Set(id),
            status: Set(false),
            ..Default::default()
        }
        .update(self.db())
        .await
        .unwrap();
    }
}

/// Occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
