//! Uptime parsing.
//!
//! The kernel counter holds two space-separated floats: seconds since boot
//! and aggregate idle seconds. Only the first is used.

use crate::host::error::{ReadError, ReadResult};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Parse the raw uptime counter into seconds since boot.
pub fn parse_uptime_seconds(raw: &str) -> ReadResult<f64> {
    let field = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| ReadError::Malformed("uptime source is empty".into()))?;

    let secs: f64 = field
        .parse()
        .map_err(|_| ReadError::Malformed(format!("uptime field '{}' is not a number", field)))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(ReadError::Malformed(format!("uptime {} out of range", secs)));
    }

    Ok(secs)
}

/// Parse the raw uptime counter into hours since boot.
pub fn parse_uptime_hours(raw: &str) -> ReadResult<f64> {
    parse_uptime_seconds(raw).map(|secs| secs / SECONDS_PER_HOUR)
}

/// Collapse a failed uptime read into the documented zero.
pub fn uptime_or_zero(result: ReadResult<f64>) -> f64 {
    match result {
        Ok(hours) => hours,
        Err(e) => {
            tracing::warn!(error = %e, "Uptime unavailable, reporting 0");
            0.0
        }
    }
}
