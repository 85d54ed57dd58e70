use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::UploadStore;
use crate::error::SiteError;

/// Upload store writing into a directory on the local filesystem.
#[derive(Clone)]
pub struct LocalUploadStore {
    pub dir: PathBuf,
}

impl UploadStore for LocalUploadStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), SiteError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create upload dir {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;
        Ok(())
    }
}
