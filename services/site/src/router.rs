use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use tower_http::services::ServeDir;

use kindred_core::health::healthz;
use kindred_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    admin::{HOME_MANAGER_PATH, dashboard, home_manager, submit_home_manager},
    health::readyz,
    home::index,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public
        .route("/", get(index))
        // Admin
        .route("/admin/dashboard", get(dashboard))
        .route(
            HOME_MANAGER_PATH,
            get(home_manager).post(submit_home_manager).layer(upload_limit),
        )
        // Static assets and uploaded banners
        .nest_service("/static", static_files)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
