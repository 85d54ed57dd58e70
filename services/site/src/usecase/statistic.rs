use tracing::info;

use crate::domain::repository::StatisticRepository;
use crate::domain::types::{NewStatistic, STATISTIC_ACTIVE, Statistic};
use crate::error::SiteError;

// ── CreateStatistic ──────────────────────────────────────────────────────────

pub struct CreateStatisticInput {
    pub label: String,
    pub value: String,
    pub display_order: i32,
    /// Defaults to `active`.
    pub status: Option<String>,
}

pub struct CreateStatisticUseCase<R: StatisticRepository> {
    pub repo: R,
}

impl<R: StatisticRepository> CreateStatisticUseCase<R> {
    pub async fn execute(&self, input: CreateStatisticInput) -> Result<Statistic, SiteError> {
        let stat = NewStatistic {
            label: input.label,
            value: input.value,
            display_order: input.display_order,
            status: input
                .status
                .unwrap_or_else(|| STATISTIC_ACTIVE.to_owned()),
        };
        let created = self.repo.create(&stat).await?;
        info!(id = created.id, label = %created.label, "statistic created");
        Ok(created)
    }
}

// ── ListStatistics ───────────────────────────────────────────────────────────

pub struct ListStatisticsUseCase<R: StatisticRepository> {
    pub repo: R,
}

impl<R: StatisticRepository> ListStatisticsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Statistic>, SiteError> {
        self.repo.list_all().await
    }
}
