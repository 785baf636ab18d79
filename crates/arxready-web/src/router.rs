//! Axum router. Maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    system::{api_status, health},
    upload::{index, submit},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.static_dir();
    let body_limit = state.config.server.max_upload_bytes;
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",       get(index))
        .route("/submit", post(submit).layer(DefaultBodyLimit::max(body_limit)))

        // Liveness and status
        .route("/health",     get(health))
        .route("/api/status", get(api_status))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
