//! Best-effort delivery of status records to the storage collaborator.
//!
//! # Responsibilities
//! - POST each record as `text/plain` with a bounded timeout
//! - Treat non-2xx answers as failures
//! - Log failures; never retry, never surface them to the caller
//! - Let shutdown wait for POSTs still in flight

use reqwest::header::CONTENT_TYPE;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinSet;

use crate::config::StorageConfig;
use crate::storage::error::ForwardError;

/// Client for the downstream `/log` endpoint.
#[derive(Debug, Clone)]
pub struct StorageForwarder {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
    in_flight: Arc<Mutex<JoinSet<()>>>,
}

impl StorageForwarder {
    /// Create a forwarder for the configured storage URL.
    pub fn new(config: &StorageConfig) -> Result<Self, ForwardError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout,
            in_flight: Arc::new(Mutex::new(JoinSet::new())),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn tasks(&self) -> MutexGuard<'_, JoinSet<()>> {
        // A panic while holding the lock leaves the set itself intact.
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of POSTs spawned and not yet collected.
    pub fn in_flight(&self) -> usize {
        self.tasks().len()
    }

    /// POST `record` once and wait for the answer.
    pub async fn send(&self, record: String) -> Result<(), ForwardError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }

        tracing::debug!(url = %self.url, status = %status, "Record stored");
        Ok(())
    }

    /// Forward `record` on a background task without waiting for it.
    ///
    /// The outcome is only logged. Use [`drain`](Self::drain) to wait for
    /// outstanding POSTs.
    pub fn dispatch(&self, record: String, request_id: String) {
        let forwarder = self.clone();
        let mut tasks = self.tasks();

        while tasks.try_join_next().is_some() {}

        tasks.spawn(async move {
            if let Err(e) = forwarder.send(record).await {
                tracing::error!(
                    request_id = %request_id,
                    url = %forwarder.url,
                    timed_out = e.is_timeout(),
                    error = %e,
                    "POST to storage failed"
                );
            }
        });
    }

    /// Wait for outstanding POSTs, giving up after the storage timeout.
    pub async fn drain(&self) {
        let mut pending = std::mem::take(&mut *self.tasks());
        if pending.is_empty() {
            return;
        }

        tracing::info!(pending = pending.len(), "Waiting for storage POSTs");
        let wait = async { while pending.join_next().await.is_some() {} };
        if tokio::time::timeout(self.timeout, wait).await.is_err() {
            tracing::warn!(
                abandoned = pending.len(),
                "Storage POSTs still pending after timeout"
            );
        }
    }
}
