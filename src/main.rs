//! Drug API - A read-only lookup service over a cached drug catalogue
//!
//! Binary entry point: wires configuration, the record store and the router.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drug_api::{api::create_router, spawn_preload_task, AppState, Config};

/// Main entry point for the drug lookup server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the record store around the configured document source
/// 4. Optionally start the background preload task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drug_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Drug Lookup API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, source={}, max_results={}, default_page_limit={}, preload={}",
        config.server_port,
        config
            .document_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| config.document_url.clone()),
        config.max_results,
        config.default_page_limit,
        config.preload
    );

    let state = AppState::from_config(&config).context("Failed to create document fetcher")?;
    info!("Record store initialized (snapshot loads on first access)");

    let preload_handle = if config.preload {
        Some(spawn_preload_task(state.records.clone()))
    } else {
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(preload_handle))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts a still-running preload task.
async fn shutdown_signal(preload_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = preload_handle {
        if !handle.is_finished() {
            handle.abort();
            warn!("Preload task aborted");
        }
    }
}
