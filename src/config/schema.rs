//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the reporter.
//! Every default matches the service's fixed behavior, so running without a
//! config file is the normal case.

use serde::{Deserialize, Serialize};

/// Root configuration for the status reporter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ReporterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream storage collaborator.
    pub storage: StorageConfig,

    /// Host metric sources.
    pub host: HostConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Downstream storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// URL every status record is POSTed to.
    pub url: String,

    /// Total timeout for the POST in seconds.
    pub timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "http://storage:5000/log".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Host metric source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Kernel uptime counter.
    pub uptime_path: String,

    /// Mount point whose free space is reported.
    pub disk_mount: String,

    /// Upper bound for a single round of host reads, in seconds.
    pub read_timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            uptime_path: "/proc/uptime".to_string(),
            disk_mount: "/".to_string(),
            read_timeout_secs: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
