use crate::domain::repository::{BannerRepository, StatisticRepository, VisionMissionRepository};
use crate::domain::types::{Banner, Statistic, VisionMission};
use crate::error::SiteError;

// ── GetHomepageContent ───────────────────────────────────────────────────────

/// Everything the public homepage shows.
#[derive(Debug, Clone)]
pub struct HomepageContent {
    pub banners: Vec<Banner>,
    pub vision_mission: Option<VisionMission>,
    pub statistics: Vec<Statistic>,
}

pub struct GetHomepageContentUseCase<B, V, S>
where
    B: BannerRepository,
    V: VisionMissionRepository,
    S: StatisticRepository,
{
    pub banners: B,
    pub vision_mission: V,
    pub statistics: S,
}

impl<B, V, S> GetHomepageContentUseCase<B, V, S>
where
    B: BannerRepository,
    V: VisionMissionRepository,
    S: StatisticRepository,
{
    pub async fn execute(&self) -> Result<HomepageContent, SiteError> {
        let banners = self.banners.list_shown().await?;
        let vision_mission = self.vision_mission.first().await?;
        let statistics = self.statistics.list_active().await?;
        Ok(HomepageContent {
            banners,
            vision_mission,
            statistics,
        })
    }
}

// ── GetAdminContent ──────────────────────────────────────────────────────────

/// Content for the admin editing view. Statistics are not part of it.
#[derive(Debug, Clone)]
pub struct AdminContent {
    pub banners: Vec<Banner>,
    pub vision_mission: Option<VisionMission>,
}

pub struct GetAdminContentUseCase<B: BannerRepository, V: VisionMissionRepository> {
    pub banners: B,
    pub vision_mission: V,
}

impl<B: BannerRepository, V: VisionMissionRepository> GetAdminContentUseCase<B, V> {
    pub async fn execute(&self) -> Result<AdminContent, SiteError> {
        let banners = self.banners.list_all().await?;
        let vision_mission = self.vision_mission.first().await?;
        Ok(AdminContent {
            banners,
            vision_mission,
        })
    }
}
