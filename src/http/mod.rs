//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → status.rs (host reads, record, detached forward)
//!     → response.rs (200 text/plain)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod status;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
