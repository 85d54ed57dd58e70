use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Directory (under the static root) holding uploaded banner images.
pub const UPLOADS_DIR: &str = "uploads";

/// Status value for statistics shown on the public homepage.
pub const STATISTIC_ACTIVE: &str = "active";

/// Homepage banner image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    /// Path relative to the static root, always `uploads/<filename>`.
    pub image_url: String,
    pub display_order: i32,
    pub is_shown: bool,
}

/// Banner about to be inserted. Display order is left to the store default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBanner {
    pub title: Option<String>,
    pub image_url: String,
}

impl NewBanner {
    pub fn for_upload(title: Option<String>, stored_filename: &str) -> Self {
        Self {
            title,
            image_url: banner_image_url(stored_filename),
        }
    }
}

pub fn banner_image_url(stored_filename: &str) -> String {
    format!("{UPLOADS_DIR}/{stored_filename}")
}

/// The organization's vision and mission statement (singleton record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionMission {
    pub id: i32,
    pub vision: String,
    pub mission: String,
    pub last_updated: DateTime<Utc>,
}

/// Numeric highlight shown on the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub id: i32,
    pub label: String,
    pub value: String,
    pub display_order: i32,
    pub status: String,
}

impl Statistic {
    pub fn is_active(&self) -> bool {
        self.status == STATISTIC_ACTIVE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatistic {
    pub label: String,
    pub value: String,
    pub display_order: i32,
    pub status: String,
}

/// File part of an admin form submission.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied name; untrusted.
    pub filename: String,
    pub bytes: Bytes,
}

/// Actions accepted by `POST /admin/home-manager`, keyed by the `action` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerAction {
    SaveVisionMission,
    AddBanner,
}

impl ManagerAction {
    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "save_vm" => Some(Self::SaveVisionMission),
            "add_banner" => Some(Self::AddBanner),
            _ => None,
        }
    }
}
