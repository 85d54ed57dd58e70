use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::debug;

use kindred_session::admin::AdminAccess;
use kindred_session::flash::{Flash, push_flash, take_flashes};

use crate::domain::types::ManagerAction;
use crate::error::SiteError;
use crate::handlers::form::ManagerForm;
use crate::state::AppState;
use crate::usecase::banner::AddBannerUseCase;
use crate::usecase::content::GetAdminContentUseCase;
use crate::usecase::vision_mission::SaveVisionMissionUseCase;
use crate::view::{AdminDashboardPage, HomePage, render};

pub const HOME_MANAGER_PATH: &str = "/admin/home-manager";

pub const VISION_MISSION_SAVED: &str = "Vision & Mission updated successfully";
pub const BANNER_ADDED: &str = "Banner added successfully";

// ── GET /admin/dashboard ─────────────────────────────────────────────────────

pub async fn dashboard(
    _admin: AdminAccess,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), SiteError> {
    let (jar, flashes) = take_flashes(jar);
    let page = render(&AdminDashboardPage { flashes: &flashes })?;
    Ok((jar, page))
}

// ── GET /admin/home-manager ──────────────────────────────────────────────────

pub async fn home_manager(
    _admin: AdminAccess,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), SiteError> {
    let usecase = GetAdminContentUseCase {
        banners: state.banner_repo(),
        vision_mission: state.vision_mission_repo(),
    };
    let content = usecase.execute().await?;
    let (jar, flashes) = take_flashes(jar);
    let page = render(&HomePage::admin(&content, &flashes))?;
    Ok((jar, page))
}

// ── POST /admin/home-manager ─────────────────────────────────────────────────

/// Apply the submitted action, then redirect back to the editor (303) whether
/// or not anything changed.
pub async fn submit_home_manager(
    _admin: AdminAccess,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    form: ManagerForm,
) -> Result<(SignedCookieJar, Redirect), SiteError> {
    let jar = match form.action() {
        Some(ManagerAction::SaveVisionMission) => {
            let usecase = SaveVisionMissionUseCase {
                repo: state.vision_mission_repo(),
            };
            usecase.execute(form.into_vision_mission_input()).await?;
            push_flash(jar, Flash::success(VISION_MISSION_SAVED))
        }
        Some(ManagerAction::AddBanner) => {
            let usecase = AddBannerUseCase {
                repo: state.banner_repo(),
                store: state.upload_store(),
            };
            match usecase.execute(form.into_add_banner_input()).await? {
                Some(_) => push_flash(jar, Flash::success(BANNER_ADDED)),
                None => jar,
            }
        }
        None => {
            debug!("home manager post without a recognized action");
            jar
        }
    };
    Ok((jar, Redirect::to(HOME_MANAGER_PATH)))
}
