//! Response post-processing.

use crate::error::ErrorBody;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Give framework-generated failures (wrong method, bad JSON, unparsable
/// path, oversized body) the same JSON envelope as handler errors. Bodies
/// that are already JSON pass through untouched.
pub async fn error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }
    tracing::debug!(status = status.as_u16(), "wrapping error body");
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);
    (parts, Json(ErrorBody::for_status(status))).into_response()
}
