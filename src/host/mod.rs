//! Host metrics subsystem.
//!
//! # Data Flow
//! ```text
//! HostProbe (raw text from the OS, each read under its own timeout)
//!     → uptime.rs / disk.rs (parse into Result<_, ReadError>)
//!     → *_or_zero (any error becomes the documented zero)
//!     → HostSample
//! ```
//!
//! A read never fails the caller. Errors are logged and replaced by
//! `0` hours and `"0"` megabytes, one metric at a time.

pub mod disk;
pub mod error;
pub mod probe;
pub mod uptime;

use std::future::Future;
use std::time::Duration;

pub use disk::{free_disk_or_zero, parse_free_disk_mb, FREE_DISK_FALLBACK};
pub use error::{ReadError, ReadResult};
pub use probe::{HostProbe, SystemProbe};
pub use uptime::{parse_uptime_hours, uptime_or_zero};

/// Host metrics gathered for one status record.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSample {
    pub uptime_hours: f64,
    pub free_disk_mb: String,
}

impl HostSample {
    /// The sample reported when nothing could be read.
    pub fn zero() -> Self {
        Self {
            uptime_hours: 0.0,
            free_disk_mb: FREE_DISK_FALLBACK.to_string(),
        }
    }
}

/// Read uptime in hours through the probe.
pub async fn read_uptime_hours(probe: &dyn HostProbe) -> ReadResult<f64> {
    let raw = probe.read_uptime().await?;
    parse_uptime_hours(&raw)
}

/// Read free megabytes on the root filesystem through the probe.
pub async fn read_free_disk_mb(probe: &dyn HostProbe) -> ReadResult<String> {
    let raw = probe.query_free_disk().await?;
    parse_free_disk_mb(&raw)
}

/// Run `read`, turning an expired `limit` into [`ReadError::Timeout`].
///
/// The read future is dropped on expiry.
pub async fn bounded<T>(
    limit: Duration,
    read: impl Future<Output = ReadResult<T>>,
) -> ReadResult<T> {
    tokio::time::timeout(limit, read)
        .await
        .unwrap_or_else(|_| Err(ReadError::Timeout(limit.as_secs())))
}

/// Take both readings concurrently, each bounded by `limit` and degraded
/// independently of the other.
pub async fn sample(probe: &dyn HostProbe, limit: Duration) -> HostSample {
    let (uptime, disk) = tokio::join!(
        bounded(limit, read_uptime_hours(probe)),
        bounded(limit, read_free_disk_mb(probe)),
    );

    HostSample {
        uptime_hours: uptime_or_zero(uptime),
        free_disk_mb: free_disk_or_zero(disk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io;

    const LIMIT: Duration = Duration::from_secs(2);

    struct FixedProbe {
        uptime: Option<&'static str>,
        disk: Option<&'static str>,
    }

    #[async_trait]
    impl HostProbe for FixedProbe {
        async fn read_uptime(&self) -> ReadResult<String> {
            self.uptime
                .map(str::to_string)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no uptime").into())
        }

        async fn query_free_disk(&self) -> ReadResult<String> {
            self.disk
                .map(str::to_string)
                .ok_or_else(|| ReadError::CommandFailed("df missing".into()))
        }
    }

    /// Uptime answers at once; disk takes `disk_delay`.
    struct SlowDiskProbe {
        disk_delay: Duration,
    }

    #[async_trait]
    impl HostProbe for SlowDiskProbe {
        async fn read_uptime(&self) -> ReadResult<String> {
            Ok("12345.67 89.01".into())
        }

        async fn query_free_disk(&self) -> ReadResult<String> {
            tokio::time::sleep(self.disk_delay).await;
            Ok("10240".into())
        }
    }

    #[tokio::test]
    async fn test_sample_reads_both() {
        let probe = FixedProbe {
            uptime: Some("12345.67 89.01"),
            disk: Some("10240"),
        };
        let s = sample(&probe, LIMIT).await;
        assert_eq!(format!("{:.2}", s.uptime_hours), "3.43");
        assert_eq!(s.free_disk_mb, "10240");
    }

    #[tokio::test]
    async fn test_failures_degrade_independently() {
        let probe = FixedProbe {
            uptime: None,
            disk: Some("10240"),
        };
        let s = sample(&probe, LIMIT).await;
        assert_eq!(s.uptime_hours, 0.0);
        assert_eq!(s.free_disk_mb, "10240");

        let probe = FixedProbe {
            uptime: Some("7200 0"),
            disk: None,
        };
        let s = sample(&probe, LIMIT).await;
        assert_eq!(s.uptime_hours, 2.0);
        assert_eq!(s.free_disk_mb, "0");
    }

    #[tokio::test]
    async fn test_malformed_sources_degrade() {
        let probe = FixedProbe {
            uptime: Some("garbage"),
            disk: Some(""),
        };
        assert_eq!(sample(&probe, LIMIT).await, HostSample::zero());
    }

    #[tokio::test]
    async fn test_slow_disk_keeps_uptime() {
        let probe = SlowDiskProbe {
            disk_delay: Duration::from_millis(300),
        };
        let s = sample(&probe, Duration::from_millis(100)).await;
        assert_eq!(format!("{:.2}", s.uptime_hours), "3.43");
        assert_eq!(s.free_disk_mb, "0");
    }

    #[tokio::test]
    async fn test_within_timeout_returns_reading() {
        let probe = SlowDiskProbe {
            disk_delay: Duration::from_millis(10),
        };
        let s = sample(&probe, LIMIT).await;
        assert_eq!(s.free_disk_mb, "10240");
    }

    #[tokio::test]
    async fn test_bounded_reports_timeout() {
        let read = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, ReadError>(1)
        };
        let err = bounded(Duration::from_millis(20), read).await.unwrap_err();
        assert!(matches!(err, ReadError::Timeout(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timed_out_child_is_killed() {
        let mut child = tokio::process::Command::new("sleep")
            .arg("30")
            .kill_on_drop(true)
            .spawn()
            .unwrap();
        let pid = child.id().unwrap();

        let read = async move {
            child.wait().await?;
            Ok::<_, ReadError>(())
        };
        assert!(bounded(Duration::from_millis(50), read).await.is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let status = std::fs::read_to_string(format!("/proc/{}/status", pid)).unwrap_or_default();
        // Gone entirely, or a zombie awaiting the runtime's reaper.
        assert!(status.is_empty() || status.contains("State:\tZ"));
    }
}
