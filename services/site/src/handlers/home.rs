use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::cookie::SignedCookieJar;

use kindred_session::flash::take_flashes;

use crate::error::SiteError;
use crate::state::AppState;
use crate::usecase::content::GetHomepageContentUseCase;
use crate::view::{HomePage, render};

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), SiteError> {
    let usecase = GetHomepageContentUseCase {
        banners: state.banner_repo(),
        vision_mission: state.vision_mission_repo(),
        statistics: state.statistic_repo(),
    };
    let content = usecase.execute().await?;
    let (jar, flashes) = take_flashes(jar);
    let page = render(&HomePage::public(&content, &flashes))?;
    Ok((jar, page))
}
