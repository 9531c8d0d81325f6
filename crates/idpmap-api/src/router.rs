use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Dataset status
        .route("/api/v1/status", get(handlers::get_status))

        // Timeline and frames
        .route("/api/v1/timeline", get(handlers::get_timeline))
        .route("/api/v1/frames/{position}", get(handlers::get_frame))

        // Navigator (slider state)
        .route("/api/v1/navigator", get(handlers::get_navigator))
        .route("/api/v1/navigator", post(handlers::set_navigator))

        // Legend and choropleth
        .route("/api/v1/legend", get(handlers::get_legend))
        .route("/api/v1/choropleth", get(handlers::get_choropleth))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
