//! Server startup and graceful shutdown

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use intake_core::IntakeConfig;
use intake_services::IntakeApi;

use crate::routes::setup_routes;
use crate::state::AppState;

/// Load stored records once, then serve the intake page until shut down.
pub async fn serve(config: &IntakeConfig, api: Arc<dyn IntakeApi>) -> Result<()> {
    let state = AppState::new(config, api);
    let loaded = state.load_records().await;
    tracing::info!(records = loaded, api_url = %config.api_url, "Initial record load finished");

    let app = setup_routes(state, &config.preview_base);
    start_server(config.dev_port, app).await
}

/// Start the server with graceful shutdown
pub async fn start_server(port: u16, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!(addr = %addr, "Starting dev server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dev server ready and accepting connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C (SIGINT) or SIGTERM.
///
/// If a handler cannot be installed, that signal is ignored and the other one
/// still triggers shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
