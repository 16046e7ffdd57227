//! App Info Service
//!
//! Reads its configuration from environment variables once at startup and
//! serves it back as JSON:
//! - `/`, `/health`, `/info`, `/config`, `/secret`, `/stats`
//! - Listens on `0.0.0.0:$PORT` (default 5000)
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use appinfo_core::EnvConfig;
use appinfo_service::{app_state::AppState, config::ServerConfig, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let env = match EnvConfig::from_env() {
        Ok(env) => env,
        Err(e) => {
            tracing::error!(error = %e, "environment snapshot failed");
            return ExitCode::FAILURE;
        }
    };

    let cfg = match ServerConfig::from_env(&env) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(env);
    match server::run(state, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "appinfo-service aborted");
            ExitCode::FAILURE
        }
    }
}
