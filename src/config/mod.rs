//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional --config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ReporterConfig (validated, immutable)
//!     → consumed once at startup
//! ```
//!
//! No file means defaults: bind 0.0.0.0:5000, POST to
//! http://storage:5000/log with a 5 second timeout.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{HostConfig, ListenerConfig, ObservabilityConfig, ReporterConfig, StorageConfig};
pub use validation::ValidationError;
