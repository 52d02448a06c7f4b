//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the status handler
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener
//! - Stop on OS signal or shutdown broadcast
//! - Wait for in-flight storage POSTs before returning

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ReporterConfig;
use crate::host::{HostProbe, SystemProbe};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::status::status_handler;
use crate::lifecycle::signals::wait_for_signal;
use crate::storage::{ForwardError, StorageForwarder};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<dyn HostProbe>,
    pub forwarder: StorageForwarder,
    pub read_timeout: Duration,
}

/// HTTP server for the status reporter.
pub struct HttpServer {
    router: Router,
    config: ReporterConfig,
    forwarder: StorageForwarder,
}

impl HttpServer {
    /// Create a server that reads metrics from the real host.
    pub fn new(config: ReporterConfig) -> Result<Self, ForwardError> {
        let probe = Arc::new(SystemProbe::new(&config.host));
        Self::with_probe(config, probe)
    }

    /// Create a server with a custom metric source.
    pub fn with_probe(
        config: ReporterConfig,
        probe: Arc<dyn HostProbe>,
    ) -> Result<Self, ForwardError> {
        let forwarder = StorageForwarder::new(&config.storage)?;

        let state = AppState {
            probe,
            forwarder: forwarder.clone(),
            read_timeout: Duration::from_secs(config.host.read_timeout_secs),
        };

        let router = Self::build_router(state);
        Ok(Self {
            router,
            config,
            forwarder,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/status", get(status_handler))
            .with_state(state)
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            storage_url = %self.config.storage.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = wait_for_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        self.forwarder.drain().await;
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get the router, e.g. to drive it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
