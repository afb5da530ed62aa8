use axum::{
    http::StatusCode,
    middleware::map_response,
    routing::{any, get},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        error::json_timeout_response,
        health::livez,
        records::{record_item, records_collection, unmatched_route},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Record routes accept every verb, and unknown paths fall back to the
/// dispatcher too, so unsupported requests get its invalid-route response.
pub fn create_app(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/livez", get(livez))
        .route("/health-records", any(records_collection))
        .route("/health-records/{recordId}", any(record_item))
        .fallback(unmatched_route)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(map_response(json_timeout_response))
        .with_state(state)
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|b| b.to_string()).unwrap_or_default();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_records_empty() {
        let app = create_app(AppState::default());

        let (status, body) = send(&app, Method::GET, "/health-records", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"healthRecords": []}));
    }

    #[tokio::test]
    async fn test_responses_are_json() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health-records/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_unsupported_verb_is_invalid_route() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/health-records",
            Some(json!({"recordId": "r1"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid route key"}));
    }

    #[tokio::test]
    async fn test_post_on_item_path_is_invalid_route() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            Method::POST,
            "/health-records/r1",
            Some(json!({"recordId": "r1"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid route key"}));
    }

    #[tokio::test]
    async fn test_update_and_delete_require_record_id() {
        let app = create_app(AppState::default());

        let (status, body) = send(
            &app,
            Method::PUT,
            "/health-records",
            Some(json!({"attribute1": "x", "attribute2": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Record ID is required for update"}));

        let (status, body) = send(&app, Method::DELETE, "/health-records", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Record ID is required for deletion"}));
    }

    #[tokio::test]
    async fn test_create_with_invalid_json_is_500() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health-records")
                    .body(Body::from("{\"recordId\":"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    async fn send_bytes(
        app: &Router,
        method: Method,
        uri: &str,
        bytes: Vec<u8>,
    ) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(bytes))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_create_with_invalid_utf8_is_json_500() {
        let app = create_app(AppState::default());

        let (status, body) =
            send_bytes(&app, Method::POST, "/health-records", vec![0xff, 0xfe, 0x7b]).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Request body could not be read:"), "{error}");
    }

    #[tokio::test]
    async fn test_update_with_invalid_utf8_is_json_500() {
        let app = create_app(AppState::default());

        let (status, body) =
            send_bytes(&app, Method::PUT, "/health-records/r1", vec![0xc3, 0x28]).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_utf8_on_unknown_verb_is_still_invalid_route() {
        let app = create_app(AppState::default());

        let (status, body) =
            send_bytes(&app, Method::PATCH, "/health-records", vec![0xff, 0xfe, 0x7b]).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid route key"}));
    }

    #[tokio::test]
    async fn test_oversized_body_is_json_500() {
        let app = create_app(AppState::default());
        let oversized = vec![b'a'; 3 * 1024 * 1024];

        let (status, body) = send_bytes(&app, Method::POST, "/health-records", oversized).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Request body could not be read:"), "{error}");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_invalid_route() {
        let app = create_app(AppState::default());

        let (status, body) = send_bytes(&app, Method::GET, "/patients", Vec::new()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid route key"}));
    }

    #[tokio::test]
    async fn test_record_lifecycle() {
        let app = create_app(AppState::default());
        let record = json!({"recordId": "r1", "attribute1": "a", "attribute2": "b", "ward": 7});

        let (status, body) =
            send(&app, Method::POST, "/health-records", Some(record.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"message": "Health record created successfully"}));

        let (status, body) = send(&app, Method::GET, "/health-records/r1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, record);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/health-records/r1",
            Some(json!({"attribute1": "x", "attribute2": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Health record updated successfully"}));

        let (status, body) = send(&app, Method::GET, "/health-records/r1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"recordId": "r1", "attribute1": "x", "attribute2": "y", "ward": 7})
        );

        let (status, body) = send(&app, Method::GET, "/health-records", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["healthRecords"].as_array().map(Vec::len), Some(1));

        let (status, body) = send(&app, Method::DELETE, "/health-records/r1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, json!({}));

        let (status, body) = send(&app, Method::GET, "/health-records/r1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Health record not found"}));
    }
}
