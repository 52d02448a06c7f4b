//! Response construction.
//!
//! Status records are always answered with 200 and `text/plain`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::record::StatusRecord;

/// Render a record as the plain-text 200 response.
pub fn plain_text(record: &StatusRecord) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        record.to_string(),
    )
        .into_response()
}
