use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway static root with an `uploads/` subdirectory, removed on drop.
pub struct TempStatic {
    dir: TempDir,
}

impl TempStatic {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("uploads")).expect("failed to create uploads dir");
        Self { dir }
    }

    pub fn static_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.dir.path().join("uploads")
    }

    /// Names of the files currently in the upload directory, sorted.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir())
            .expect("failed to read uploads dir")
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.upload_dir().join(name)).expect("uploaded file missing")
    }
}

impl Default for TempStatic {
    fn default() -> Self {
        Self::new()
    }
}
