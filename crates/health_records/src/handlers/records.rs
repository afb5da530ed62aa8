//! Health record routes.
//!
//! These handlers only translate between HTTP and the dispatcher's request and
//! response descriptors. Routing decisions and store access happen in
//! [`Dispatcher::dispatch`](health_records_core::dispatch::Dispatcher::dispatch).

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, MatchedPath, Path, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use health_records_core::dispatch::{RouteRequest, RouteResponse};

use crate::state::AppState;

/// Any verb on /health-records.
pub async fn records_collection(
    State(state): State<AppState>,
    method: Method,
    matched_path: MatchedPath,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = build_route_request(
        &method,
        matched_path.as_str(),
        None,
        body.map_err(|rejection| rejection.body_text()),
    );
    dispatch(&state, &request).await
}

/// Any verb on /health-records/{recordId}.
pub async fn record_item(
    State(state): State<AppState>,
    method: Method,
    matched_path: MatchedPath,
    Path(path_parameters): Path<HashMap<String, String>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = build_route_request(
        &method,
        matched_path.as_str(),
        Some(path_parameters),
        body.map_err(|rejection| rejection.body_text()),
    );
    dispatch(&state, &request).await
}

/// Any path the router does not know. The literal path becomes the route key,
/// so the dispatcher answers with its own JSON error.
pub async fn unmatched_route(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = build_route_request(
        &method,
        uri.path(),
        None,
        body.map_err(|rejection| rejection.body_text()),
    );
    dispatch(&state, &request).await
}

async fn dispatch(state: &AppState, request: &RouteRequest) -> Response {
    let response = state.dispatcher.dispatch(request).await;
    into_http_response(response)
}

/// Builds the request descriptor for a matched route.
///
/// The route key is the verb followed by the path template, so both
/// `/health-records/abc` and `/health-records/xyz` share one key. An empty
/// body is treated as no body. A body that could not be buffered or is not
/// UTF-8 is handed to the dispatcher as unreadable, so routing still runs first.
pub fn build_route_request(
    method: &Method,
    path_template: &str,
    path_parameters: Option<HashMap<String, String>>,
    body: Result<Bytes, String>,
) -> RouteRequest {
    let request = RouteRequest {
        route_key: format!("{method} {path_template}"),
        path_parameters,
        ..RouteRequest::default()
    };

    let text = body.and_then(|bytes| {
        String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
    });
    match text {
        Ok(text) if text.is_empty() => request,
        Ok(text) => request.with_body(text),
        Err(message) => request.with_unreadable_body(message),
    }
}

/// Converts a response descriptor into an HTTP response with a JSON body.
pub fn into_http_response(response: RouteResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
