use tracing::{debug, info};

use crate::domain::filename::secure_filename;
use crate::domain::repository::{BannerRepository, UploadStore};
use crate::domain::types::{Banner, NewBanner, UploadedFile};
use crate::error::SiteError;

// ── AddBanner ────────────────────────────────────────────────────────────────

pub struct AddBannerInput {
    pub file: Option<UploadedFile>,
    pub title: Option<String>,
}

pub struct AddBannerUseCase<R: BannerRepository, U: UploadStore> {
    pub repo: R,
    pub store: U,
}

impl<R: BannerRepository, U: UploadStore> AddBannerUseCase<R, U> {
    /// Store the uploaded image and record a shown banner pointing at it.
    ///
    /// Returns `Ok(None)` without touching storage when no file was sent or its
    /// name sanitizes to nothing. A same-named file already on disk is replaced.
    pub async fn execute(&self, input: AddBannerInput) -> Result<Option<Banner>, SiteError> {
        let Some(file) = input.file else {
            debug!("banner submission without file part");
            return Ok(None);
        };
        let filename = secure_filename(&file.filename);
        if filename.is_empty() {
            debug!(raw = %file.filename, "banner submission without usable filename");
            return Ok(None);
        }

        self.store.save(&filename, &file.bytes).await?;
        let banner = self
            .repo
            .create(&NewBanner::for_upload(input.title, &filename))
            .await?;
        info!(id = banner.id, image_url = %banner.image_url, "banner added");
        Ok(Some(banner))
    }
}

// ── ListBanners ──────────────────────────────────────────────────────────────

pub struct ListBannersUseCase<R: BannerRepository> {
    pub repo: R,
}

impl<R: BannerRepository> ListBannersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Banner>, SiteError> {
        self.repo.list_all().await
    }
}
