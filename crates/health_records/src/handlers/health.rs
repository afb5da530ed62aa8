//! Health check endpoint for Kubernetes-style liveness checks.

use axum::http::StatusCode;

/// GET /livez - Basic liveness check.
///
/// Returns 200 immediately. Does not touch the record store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
