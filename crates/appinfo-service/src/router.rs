//! Axum router wiring.
//!
//! Exactly six GET routes. Anything else falls through to axum's default
//! 404 (unknown path) or 405 (known path, other method).

use axum::http::Request;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::{app_state::AppState, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::meta::index))
        .route("/health", get(routes::meta::health))
        .route("/info", get(routes::env::info))
        .route("/config", get(routes::env::config))
        .route("/secret", get(routes::env::secret))
        .route("/stats", get(routes::stats::stats))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path()
                )
            }),
        )
        .with_state(state)
}
