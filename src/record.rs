//! The status record returned by and forwarded from `GET /status`.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

use crate::host::HostSample;

/// One status observation. Built per request and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    /// ISO-8601 UTC, whole seconds, trailing `Z`.
    pub timestamp: String,
    pub uptime_hours: f64,
    /// Kept as text: the disk query's output is passed through unchanged.
    pub free_disk_mb: String,
}

impl StatusRecord {
    pub fn new(now: DateTime<Utc>, sample: HostSample) -> Self {
        Self {
            timestamp: timestamp_iso_utc(now),
            uptime_hours: sample.uptime_hours,
            free_disk_mb: sample.free_disk_mb,
        }
    }

    /// Build a record stamped with the current time.
    pub fn capture(sample: HostSample) -> Self {
        Self::new(Utc::now(), sample)
    }
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: uptime {:.2} hours, free disk in root: {} MBytes",
            self.timestamp, self.uptime_hours, self.free_disk_mb
        )
    }
}

/// Format `now` as ISO-8601 UTC with the fractional seconds stripped.
pub fn timestamp_iso_utc(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}
