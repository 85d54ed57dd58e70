use tracing::info;

use crate::domain::repository::VisionMissionRepository;
use crate::domain::types::VisionMission;
use crate::error::SiteError;

// ── SaveVisionMission ────────────────────────────────────────────────────────

/// Missing fields overwrite the stored text with an empty string.
pub struct SaveVisionMissionInput {
    pub vision: Option<String>,
    pub mission: Option<String>,
}

pub struct SaveVisionMissionUseCase<R: VisionMissionRepository> {
    pub repo: R,
}

impl<R: VisionMissionRepository> SaveVisionMissionUseCase<R> {
    pub async fn execute(
        &self,
        input: SaveVisionMissionInput,
    ) -> Result<VisionMission, SiteError> {
        let existing = self.repo.first().await?;
        let vision = input.vision.unwrap_or_default();
        let mission = input.mission.unwrap_or_default();
        let saved = self
            .repo
            .save(existing.map(|vm| vm.id), &vision, &mission)
            .await?;
        info!(id = saved.id, "vision/mission saved");
        Ok(saved)
    }
}
