//! Host metric sources.
//!
//! [`HostProbe`] returns the raw text of each source. Parsing and the
//! zero fallback live in `uptime.rs` and `disk.rs` so they can be tested
//! without touching the OS.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use crate::config::HostConfig;
use crate::host::error::{ReadError, ReadResult};

/// Raw access to the host's uptime counter and disk-usage query.
///
/// Callers bound each method with a timeout and drop the future when it
/// expires, so implementations must release their resources on drop.
#[async_trait]
pub trait HostProbe: Send + Sync + 'static {
    /// Contents of the uptime counter, e.g. `"12345.67 89.01\n"`.
    async fn read_uptime(&self) -> ReadResult<String>;

    /// Output of the free-space query for the root filesystem.
    async fn query_free_disk(&self) -> ReadResult<String>;
}

/// Probe backed by `/proc/uptime` and `df`.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    uptime_path: PathBuf,
    disk_mount: String,
}

impl SystemProbe {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            uptime_path: PathBuf::from(&config.uptime_path),
            disk_mount: config.disk_mount.clone(),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(&HostConfig::default())
    }
}

#[async_trait]
impl HostProbe for SystemProbe {
    async fn read_uptime(&self) -> ReadResult<String> {
        Ok(tokio::fs::read_to_string(&self.uptime_path).await?)
    }

    async fn query_free_disk(&self) -> ReadResult<String> {
        // A hung mount can stall df indefinitely; the child dies with the future.
        let output = Command::new("df")
            .arg(&self.disk_mount)
            .arg("--output=avail")
            .arg("-m")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReadError::CommandFailed(format!(
                "df exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ReadError::Malformed(format!("df output is not UTF-8: {}", e)))
    }
}
