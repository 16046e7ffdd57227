//! Endpoints that read the environment snapshot.
//!
//! Every response is an explicit allow-list of fields. `EnvConfig` itself is
//! never serialized, so a new variable cannot leak through `/config`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::error::ApiError;

pub const INFO_DESCRIPTION: &str = "Application information";
pub const CONFIG_NOTE: &str = "Secrets are not exposed for security reasons";
pub const SECRET_NOTE: &str = "This message comes from Secret Manager";

#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    hostname: String,
    description: &'static str,
    environment: String,
    app_name: String,
    port: String,
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let env = state.env();
    Json(InfoResponse {
        hostname: env.hostname_or_default().to_owned(),
        description: INFO_DESCRIPTION,
        environment: env.environment_or_default().to_owned(),
        app_name: env.app_name_or_default().to_owned(),
        port: env.port_or_default().to_owned(),
    })
}

/// Raw values: absent variables serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    app_name: Option<String>,
    environment: Option<String>,
    has_secret_message: bool,
    has_api_key: bool,
    note: &'static str,
}

pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let env = state.env();
    Json(ConfigResponse {
        app_name: env.app_name().map(str::to_owned),
        environment: env.environment().map(str::to_owned),
        has_secret_message: env.has_secret_message(),
        has_api_key: env.has_api_key(),
        note: CONFIG_NOTE,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct SecretResponse {
    secret_message: String,
    note: &'static str,
}

pub async fn secret(State(state): State<AppState>) -> Result<Json<SecretResponse>, ApiError> {
    let secret_message = state.env().secret()?.to_owned();
    Ok(Json(SecretResponse {
        secret_message,
        note: SECRET_NOTE,
    }))
}
