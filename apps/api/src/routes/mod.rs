pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::plans::handlers::handle_generate_plan;
use crate::roadmap::handlers::handle_generate_roadmap;
use crate::scanner::handlers::handle_scan_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/roadmap/generation", post(handle_generate_roadmap))
        .route("/plan/generation", post(handle_generate_plan))
        .route("/resume/scan", post(handle_scan_resume).layer(upload_limit))
        .with_state(state)
}
