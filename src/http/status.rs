//! `GET /status` handler.
//!
//! Timestamp, host reads, record, detached POST to storage, 200. Nothing in
//! here can turn into an error response.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Response,
};
use chrono::Utc;

use crate::host;
use crate::http::request::request_id;
use crate::http::response::plain_text;
use crate::http::server::AppState;
use crate::record::StatusRecord;

pub async fn status_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = request_id(&headers);
    let now = Utc::now();

    let sample = host::sample(state.probe.as_ref(), state.read_timeout).await;
    let record = StatusRecord::new(now, sample);
    let body = record.to_string();

    tracing::debug!(
        request_id = %request_id,
        uptime_hours = record.uptime_hours,
        free_disk_mb = %record.free_disk_mb,
        "Status record built"
    );

    state.forwarder.dispatch(body, request_id);

    plain_text(&record)
}
