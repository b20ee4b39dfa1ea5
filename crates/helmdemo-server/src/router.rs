//! Axum router wiring.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, greeting, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::index))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
