//! Host status reporter library.

pub mod config;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod record;
pub mod storage;

pub use config::ReporterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use record::StatusRecord;
