//! Observability subsystem.
//!
//! All subsystems emit `tracing` events with structured fields. Request
//! spans come from `tower_http::trace::TraceLayer`; the `x-request-id`
//! header ties handler logs and the downstream failure log to a request.

pub mod logging;
