//! Per-instance statistics.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

pub const STATS_NOTE: &str = "This counter resets on every Cloud Run instance";

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    requests_handled: u64,
    hostname: String,
    note: &'static str,
    environment: String,
}

/// Count this call and report the post-increment total.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let requests_handled = state.counter().increment();
    tracing::debug!(requests_handled, "stats requested");

    let env = state.env();
    Json(StatsResponse {
        requests_handled,
        hostname: env.hostname_or_default().to_owned(),
        note: STATS_NOTE,
        environment: env.environment_or_default().to_owned(),
    })
}
