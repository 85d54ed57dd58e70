use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use kindred_core::sea_ext::OrderByPosition;
use kindred_site_schema::{banners, statistic, vision_mission};

use crate::domain::repository::{BannerRepository, StatisticRepository, VisionMissionRepository};
use crate::domain::types::{
    Banner, NewBanner, NewStatistic, STATISTIC_ACTIVE, Statistic, VisionMission,
};
use crate::error::SiteError;

// ── Banner repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBannerRepository {
    pub db: DatabaseConnection,
}

impl BannerRepository for DbBannerRepository {
    async fn list_shown(&self) -> Result<Vec<Banner>, SiteError> {
        let models = banners::Entity::find()
            .filter(banners::Column::Status.eq(true))
            .order_by_position(banners::Column::DisplayOrder, banners::Column::Id)
            .all(&self.db)
            .await
            .context("list shown banners")?;
        Ok(models.into_iter().map(banner_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<Banner>, SiteError> {
        let models = banners::Entity::find()
            .order_by_position(banners::Column::DisplayOrder, banners::Column::Id)
            .all(&self.db)
            .await
            .context("list all banners")?;
        Ok(models.into_iter().map(banner_from_model).collect())
    }

    async fn create(&self, banner: &NewBanner) -> Result<Banner, SiteError> {
        // display_order stays NotSet so the column default applies.
        let model = banners::ActiveModel {
            title: Set(banner.title.clone()),
            image_url: Set(banner.image_url.clone()),
            status: Set(true),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create banner")?;
        Ok(banner_from_model(model))
    }
}

fn banner_from_model(model: banners::Model) -> Banner {
    Banner {
        id: model.id,
        title: model.title.unwrap_or_default(),
        image_url: model.image_url,
        display_order: model.display_order,
        is_shown: model.status,
    }
}

// ── Vision/mission repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVisionMissionRepository {
    pub db: DatabaseConnection,
}

impl VisionMissionRepository for DbVisionMissionRepository {
    async fn first(&self) -> Result<Option<VisionMission>, SiteError> {
        let model = vision_mission::Entity::find()
            .order_by_asc(vision_mission::Column::Id)
            .one(&self.db)
            .await
            .context("find vision/mission")?;
        Ok(model.map(vision_mission_from_model))
    }

    async fn save(
        &self,
        id: Option<i32>,
        vision: &str,
        mission: &str,
    ) -> Result<VisionMission, SiteError> {
        // last_updated is stamped by the entity's before_save hook.
        let mut am = vision_mission::ActiveModel {
            vision_description: Set(Some(vision.to_owned())),
            mission_description: Set(Some(mission.to_owned())),
            ..Default::default()
        };
        let model = match id {
            Some(id) => {
                am.id = Set(id);
                am.update(&self.db).await.context("update vision/mission")?
            }
            None => am.insert(&self.db).await.context("create vision/mission")?,
        };
        Ok(vision_mission_from_model(model))
    }
}

fn vision_mission_from_model(model: vision_mission::Model) -> VisionMission {
    VisionMission {
        id: model.id,
        vision: model.vision_description.unwrap_or_default(),
        mission: model.mission_description.unwrap_or_default(),
        last_updated: model.last_updated,
    }
}

// ── Statistic repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStatisticRepository {
    pub db: DatabaseConnection,
}

impl StatisticRepository for DbStatisticRepository {
    async fn list_active(&self) -> Result<Vec<Statistic>, SiteError> {
        let models = statistic::Entity::find()
            .filter(statistic::Column::Status.eq(STATISTIC_ACTIVE))
            .order_by_position(statistic::Column::DisplayOrder, statistic::Column::Id)
            .all(&self.db)
            .await
            .context("list active statistics")?;
        Ok(models.into_iter().map(statistic_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<Statistic>, SiteError> {
        let models = statistic::Entity::find()
            .order_by_position(statistic::Column::DisplayOrder, statistic::Column::Id)
            .all(&self.db)
            .await
            .context("list all statistics")?;
        Ok(models.into_iter().map(statistic_from_model).collect())
    }

    async fn create(&self, stat: &NewStatistic) -> Result<Statistic, SiteError> {
        let model = statistic::ActiveModel {
            label: Set(stat.label.clone()),
            value: Set(stat.value.clone()),
            display_order: Set(stat.display_order),
            status: Set(stat.status.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create statistic")?;
        Ok(statistic_from_model(model))
    }
}

fn statistic_from_model(model: statistic::Model) -> Statistic {
    Statistic {
        id: model.id,
        label: model.label,
        value: model.value,
        display_order: model.display_order,
        status: model.status,
    }
}
