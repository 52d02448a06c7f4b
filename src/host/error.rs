//! Host read error definitions.

use thiserror::Error;

/// Errors that can occur while reading a host metric.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The metric source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source was read but its contents were not understood.
    #[error("Malformed output: {0}")]
    Malformed(String),

    /// The disk-usage command ran but exited unsuccessfully.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// The read did not finish within the configured bound.
    #[error("Read timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type for host reads.
pub type ReadResult<T> = Result<T, ReadError>;
