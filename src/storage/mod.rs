//! Downstream storage subsystem.
//!
//! # Data Flow
//! ```text
//! status handler
//!     → forwarder.rs (detached POST, text/plain, bounded timeout)
//!     → storage collaborator /log
//!     → outcome logged, never returned to the handler
//!     → drain() on shutdown waits for what is still in flight
//! ```

pub mod error;
pub mod forwarder;

pub use error::ForwardError;
pub use forwarder::StorageForwarder;
