//! Host status reporter.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /status
//!     ──────────────▶ http::server ──▶ http::status
//!                                          │
//!                       ┌──────────────────┼───────────────────┐
//!                       ▼                  ▼                   ▼
//!                 host (uptime,      record (format     storage (detached
//!                 free disk; zero    the status line)   POST to /log, logged
//!                 on failure)                            on failure)
//!                                          │
//!     ◀──────────────  200 text/plain  ────┘
//! ```
//!
//! Every request answers 200. Host read failures degrade to zeros and
//! storage failures are only logged.

use clap::Parser;
use std::path::PathBuf;

use status_reporter::lifecycle::startup;

#[derive(Parser)]
#[command(name = "status-reporter")]
#[command(about = "Reports host uptime and free disk space over HTTP", long_about = None)]
struct Args {
    /// Optional TOML config file; built-in defaults apply without it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    startup::start(args.config.as_deref()).await
}
