//! JSON bodies for responses produced by middleware rather than the dispatcher.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Replaces the empty body of a request-timeout response with a JSON error.
///
/// Used with `axum::middleware::map_response` outside the timeout layer.
pub async fn json_timeout_response(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(json!({ "error": "Request timed out" })),
    )
        .into_response()
}
