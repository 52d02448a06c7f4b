//! Free disk space parsing.
//!
//! `df <mount> --output=avail -m` prints a header line followed by the
//! available megabytes. The value is kept as text exactly as `df` printed it.

use crate::host::error::{ReadError, ReadResult};

/// Value reported when the disk query fails.
pub const FREE_DISK_FALLBACK: &str = "0";

/// Extract the free megabytes from raw disk-usage output.
///
/// Takes the first token of the last non-blank line, so both the full
/// `df` output and a bare number are accepted.
pub fn parse_free_disk_mb(raw: &str) -> ReadResult<String> {
    raw.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
        .ok_or_else(|| ReadError::Malformed("disk usage output is empty".into()))
}

/// Collapse a failed disk query into the documented `"0"`.
pub fn free_disk_or_zero(result: ReadResult<String>) -> String {
    match result {
        Ok(mb) => mb,
        Err(e) => {
            tracing::warn!(error = %e, "Free disk unavailable, reporting 0");
            FREE_DISK_FALLBACK.to_string()
        }
    }
}
