//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected and returned together.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ReporterConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("storage.url '{url}' is invalid: {reason}")]
    StorageUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &ReporterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match url::Url::parse(&config.storage.url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
        Ok(parsed) => errors.push(ValidationError::StorageUrl {
            url: config.storage.url.clone(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        }),
        Err(e) => errors.push(ValidationError::StorageUrl {
            url: config.storage.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.storage.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("storage.timeout_secs"));
    }
    if config.host.read_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("host.read_timeout_secs"));
    }
    if config.host.uptime_path.trim().is_empty() {
        errors.push(ValidationError::Empty("host.uptime_path"));
    }
    if config.host.disk_mount.trim().is_empty() {
        errors.push(ValidationError::Empty("host.disk_mount"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
