//! Listener setup and graceful shutdown.

use tokio::net::TcpListener;

use appinfo_core::error::{AppInfoError, Result};

use crate::{app_state::AppState, config::ServerConfig, router};

/// Bind, serve until Ctrl+C / SIGTERM, then drain in-flight requests.
pub async fn run(state: AppState, cfg: &ServerConfig) -> Result<()> {
    let listen = cfg.listen_addr();
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| AppInfoError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, "appinfo-service starting");

    let app = router::build_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppInfoError::Internal(format!("server failed: {e}")))?;

    tracing::info!(
        requests_handled = state.counter().current(),
        "appinfo-service stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
