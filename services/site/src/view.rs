//! askama page templates. Templates live in `services/site/templates/`.

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use kindred_session::flash::Flash;

use crate::domain::types::{Banner, Statistic, VisionMission};
use crate::error::SiteError;
use crate::usecase::content::{AdminContent, HomepageContent};

/// Homepage layout shared by the public view and the admin editor.
///
/// `stats` is `None` in admin mode: the editor renders without the statistics section.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage<'a> {
    pub banners: &'a [Banner],
    pub vm: Option<&'a VisionMission>,
    pub stats: Option<&'a [Statistic]>,
    pub admin: bool,
    pub flashes: &'a [Flash],
}

impl<'a> HomePage<'a> {
    pub fn public(content: &'a HomepageContent, flashes: &'a [Flash]) -> Self {
        Self {
            banners: &content.banners,
            vm: content.vision_mission.as_ref(),
            stats: Some(&content.statistics),
            admin: false,
            flashes,
        }
    }

    pub fn admin(content: &'a AdminContent, flashes: &'a [Flash]) -> Self {
        Self {
            banners: &content.banners,
            vm: content.vision_mission.as_ref(),
            stats: None,
            admin: true,
            flashes,
        }
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardPage<'a> {
    pub flashes: &'a [Flash],
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: &'static str,
    pub flashes: &'static [Flash],
}

impl ErrorPage {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            flashes: &[],
        }
    }
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>, SiteError> {
    Ok(Html(page.render()?))
}
