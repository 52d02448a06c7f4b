//! Startup orchestration.
//!
//! Config is resolved before logging starts, so config errors are returned
//! to `main` for printing. Everything after that logs through `tracing`.

use std::path::Path;
use tokio::net::TcpListener;

use crate::config::{resolve_config, ReporterConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::logging::init_logging;

/// Load config, start logging, bind, and serve until shutdown.
pub async fn start(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(config_path)?;
    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?config_path,
        "status-reporter starting"
    );

    serve(config, Shutdown::new()).await
}

/// Bind the configured address and serve until `shutdown` fires or a signal arrives.
pub async fn serve(
    config: ReporterConfig,
    shutdown: Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        storage_url = %config.storage.url,
        storage_timeout_secs = config.storage.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
