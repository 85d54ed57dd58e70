use axum::extract::State;
use axum::http::StatusCode;

use kindred_core::health::check_database;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    check_database(&state.db).await
}
