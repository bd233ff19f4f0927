//! Axum server setup and routing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::live))
        .route("/encrypt", get(api::encrypt))
        .route("/verify", get(api::verify))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
