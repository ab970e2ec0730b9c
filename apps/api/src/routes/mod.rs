pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::analysis::sanitize::MAX_CONTENT_BYTES;
use crate::state::AppState;

/// Room for JSON escaping / multipart framing on top of the content cap.
const BODY_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/upload", post(handlers::handle_analyze_upload))
        .route("/api/v1/analysis/latest", get(handlers::handle_latest))
        .layer(DefaultBodyLimit::max(MAX_CONTENT_BYTES + BODY_OVERHEAD_BYTES))
        .with_state(state)
}
