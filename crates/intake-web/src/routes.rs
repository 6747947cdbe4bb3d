//! Route configuration and setup

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the router. Preview URLs are served under `preview_base`.
pub fn setup_routes(state: AppState, preview_base: &str) -> Router {
    let preview_route = format!("{}/{{id}}", preview_base.trim_end_matches('/'));

    Router::new()
        .route("/", get(handlers::index))
        .route("/select", post(handlers::select))
        .route("/submit", post(handlers::submit))
        .route(&preview_route, get(handlers::preview))
        .route("/health", get(handlers::health))
        // Picked files have no size cap; they are only staged locally
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
