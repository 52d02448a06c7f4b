//! Shared utilities for integration tests.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use status_reporter::host::{HostProbe, ReadError, ReadResult};
use status_reporter::{HttpServer, ReporterConfig, Shutdown};

/// A POST received by a mock storage backend.
#[allow(dead_code)]
#[derive(Debug)]
pub struct StoredRecord {
    pub content_type: String,
    pub body: String,
}

/// Probe returning fixed raw text, or an error when `None`.
pub struct StubProbe {
    pub uptime: Option<&'static str>,
    pub disk: Option<&'static str>,
}

#[async_trait]
impl HostProbe for StubProbe {
    async fn read_uptime(&self) -> ReadResult<String> {
        self.uptime
            .map(str::to_string)
            .ok_or_else(|| ReadError::Malformed("uptime source unreadable".into()))
    }

    async fn query_free_disk(&self) -> ReadResult<String> {
        self.disk
            .map(str::to_string)
            .ok_or_else(|| ReadError::CommandFailed("df not found".into()))
    }
}

async fn serve_on_ephemeral(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Start a mock storage backend that answers `status` after `delay`,
/// forwarding every received record to the returned channel.
pub async fn start_mock_storage(
    status: StatusCode,
    delay: Duration,
) -> (SocketAddr, mpsc::UnboundedReceiver<StoredRecord>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let app = Router::new().route(
        "/log",
        post(move |headers: HeaderMap, body: Bytes| {
            let tx = tx.clone();
            async move {
                let content_type = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let _ = tx.send(StoredRecord {
                    content_type,
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
                tokio::time::sleep(delay).await;
                (status, "OK\n")
            }
        }),
    );

    (serve_on_ephemeral(app).await, rx)
}

/// An address nothing is listening on.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start the reporter with `probe`, forwarding to `storage_addr`.
pub async fn start_reporter(
    probe: StubProbe,
    storage_addr: SocketAddr,
    storage_timeout_secs: u64,
) -> (SocketAddr, Shutdown) {
    let (addr, shutdown, _server) = spawn_reporter(probe, storage_addr, storage_timeout_secs).await;
    (addr, shutdown)
}

/// Like [`start_reporter`], also returning the server task.
pub async fn spawn_reporter(
    probe: StubProbe,
    storage_addr: SocketAddr,
    storage_timeout_secs: u64,
) -> (SocketAddr, Shutdown, JoinHandle<()>) {
    let mut config = ReporterConfig::default();
    config.storage.url = format!("http://{}/log", storage_addr);
    config.storage.timeout_secs = storage_timeout_secs;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::with_probe(config, Arc::new(probe)).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown, server)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Check the `<ts>: uptime <f.2> hours, free disk in root: <s> MBytes` shape.
pub fn assert_record_grammar(record: &str) {
    let (timestamp, rest) = record
        .split_once(": uptime ")
        .unwrap_or_else(|| panic!("missing uptime section: {record}"));

    assert!(timestamp.ends_with('Z'), "timestamp must end in Z: {timestamp}");
    assert!(!timestamp.contains('.'), "timestamp has fraction: {timestamp}");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp is not ISO-8601: {timestamp}"
    );

    let (uptime, rest) = rest
        .split_once(" hours, free disk in root: ")
        .unwrap_or_else(|| panic!("missing disk section: {record}"));
    let (whole, frac) = uptime.split_once('.').expect("uptime has no decimals");
    assert!(whole.chars().all(|c| c.is_ascii_digit()) && !whole.is_empty());
    assert_eq!(frac.len(), 2, "uptime must have 2 decimals: {uptime}");
    assert!(frac.chars().all(|c| c.is_ascii_digit()));

    let disk = rest
        .strip_suffix(" MBytes")
        .unwrap_or_else(|| panic!("missing MBytes suffix: {record}"));
    assert!(!disk.is_empty());
}
