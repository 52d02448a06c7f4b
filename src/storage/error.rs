//! Downstream storage error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from forwarding a record to storage.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Connection, timeout, or protocol failure.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Storage answered with a non-2xx status.
    #[error("storage responded with status {0}")]
    Status(StatusCode),
}

impl ForwardError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ForwardError::Request(e) if e.is_timeout())
    }
}
