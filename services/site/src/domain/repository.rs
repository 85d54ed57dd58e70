#![allow(async_fn_in_trait)]

use crate::domain::types::{Banner, NewBanner, NewStatistic, Statistic, VisionMission};
use crate::error::SiteError;

/// Repository for homepage banners.
pub trait BannerRepository: Send + Sync {
    /// Banners with status shown, by display order then insertion order.
    async fn list_shown(&self) -> Result<Vec<Banner>, SiteError>;

    /// Every banner regardless of status, same ordering as `list_shown`.
    async fn list_all(&self) -> Result<Vec<Banner>, SiteError>;

    async fn create(&self, banner: &NewBanner) -> Result<Banner, SiteError>;
}

/// Repository for the singleton vision/mission record.
pub trait VisionMissionRepository: Send + Sync {
    /// The first record (lowest id), if any has been saved.
    async fn first(&self) -> Result<Option<VisionMission>, SiteError>;

    /// Overwrite the record with `id`, or insert a new one when `id` is `None`.
    async fn save(
        &self,
        id: Option<i32>,
        vision: &str,
        mission: &str,
    ) -> Result<VisionMission, SiteError>;
}

/// Repository for homepage statistics.
pub trait StatisticRepository: Send + Sync {
    /// Statistics with status `active`, by display order then insertion order.
    async fn list_active(&self) -> Result<Vec<Statistic>, SiteError>;

    async fn list_all(&self) -> Result<Vec<Statistic>, SiteError>;

    async fn create(&self, statistic: &NewStatistic) -> Result<Statistic, SiteError>;
}

/// Port for persisting uploaded files.
pub trait UploadStore: Send + Sync {
    /// Write `bytes` under `filename`, replacing any existing file of that name.
    /// `filename` must already be sanitized.
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), SiteError>;
}
