//! Environment-independent endpoints.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::ENDPOINTS;

pub const SERVICE_NAME: &str = "App Info Service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "Example service demonstrating CI/CD and Cloud Run";

#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    service: &'static str,
    version: &'static str,
    description: &'static str,
    endpoints: [&'static str; 5],
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        description: SERVICE_DESCRIPTION,
        endpoints: ENDPOINTS,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Liveness probe. The timestamp is taken per call.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
