//! Record dispatcher.
//!
//! Routes one request descriptor to one CRUD action against the injected
//! [`RecordStore`] and turns the outcome into one response descriptor.

use std::sync::Arc;

use serde_json::json;

use crate::record::{AttributePatch, HealthRecord};
use crate::storage::RecordStore;

use super::{DispatchError, Route, RouteRequest, RouteResponse};

const CREATED_MESSAGE: &str = "Health record created successfully";
const UPDATED_MESSAGE: &str = "Health record updated successfully";

type DispatchResult = Result<RouteResponse, DispatchError>;

/// Stateless dispatcher over a shared record store.
///
/// Cloning is cheap and clones share the same store, so one dispatcher can
/// serve concurrent requests.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn RecordStore>,
}

impl Dispatcher {
    /// Creates a dispatcher backed by the given store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Handles one request. Never fails: every error becomes a response.
    pub async fn dispatch(&self, request: &RouteRequest) -> RouteResponse {
        let result = match Route::from_route_key(&request.route_key) {
            Some(route) => {
                tracing::debug!(route_key = %request.route_key, ?route, "Dispatching request");
                self.dispatch_route(route, request).await
            }
            None => Err(DispatchError::InvalidRoute),
        };

        result.unwrap_or_else(|error| {
            match &error {
                DispatchError::Backend(message) => {
                    tracing::error!(route_key = %request.route_key, error = %message, "Request failed")
                }
                _ => tracing::warn!(route_key = %request.route_key, error = %error, "Request rejected"),
            }
            RouteResponse::from_error(&error)
        })
    }

    async fn dispatch_route(&self, route: Route, request: &RouteRequest) -> DispatchResult {
        match route {
            // Both GET keys share one path; only the recordId parameter matters.
            Route::ListRecords | Route::GetRecord => match request.record_id() {
                Some(record_id) => self.get_record(record_id).await,
                None => self.list_records().await,
            },
            Route::CreateRecord => self.create_record(request).await,
            Route::UpdateRecord => self.update_record(request).await,
            Route::DeleteRecord => self.delete_record(request).await,
        }
    }

    async fn get_record(&self, record_id: &str) -> DispatchResult {
        let record = self
            .store
            .get_record(record_id)
            .await?
            .ok_or(DispatchError::NotFound)?;

        Ok(RouteResponse::json(200, &json!(record)))
    }

    async fn list_records(&self) -> DispatchResult {
        let records = self.store.scan_records().await?;
        tracing::debug!(count = records.len(), "Scanned health records");

        Ok(RouteResponse::json(200, &json!({ "healthRecords": records })))
    }

    async fn create_record(&self, request: &RouteRequest) -> DispatchResult {
        let record = HealthRecord::from_json_str(request.body()?)?;
        self.store.put_record(&record).await?;

        tracing::info!(record_id = ?record.record_id(), "Created health record");
        Ok(RouteResponse::message(201, CREATED_MESSAGE))
    }

    async fn update_record(&self, request: &RouteRequest) -> DispatchResult {
        let record_id = request.record_id().ok_or(DispatchError::MissingUpdateId)?;

        let patch = AttributePatch::from_json_str(request.body()?)?;
        self.store.update_attributes(record_id, &patch).await?;

        tracing::info!(record_id, "Updated health record");
        Ok(RouteResponse::message(200, UPDATED_MESSAGE))
    }

    async fn delete_record(&self, request: &RouteRequest) -> DispatchResult {
        let record_id = request.record_id().ok_or(DispatchError::MissingDeleteId)?;
        self.store.delete_record(record_id).await?;

        tracing::info!(record_id, "Deleted health record");
        Ok(RouteResponse::json(204, &json!({})))
    }
}
