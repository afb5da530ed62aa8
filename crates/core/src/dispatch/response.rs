use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{dispatch_error_to_status_code, DispatchError};

/// Outbound response descriptor. `body` is always JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub status_code: u16,
    pub body: String,
}

impl RouteResponse {
    /// Builds a response whose body is the given JSON value.
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// Builds a `{"message": ...}` response.
    pub fn message(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &json!({ "message": message }))
    }

    /// Builds the `{"error": ...}` response for a dispatch error.
    pub fn from_error(error: &DispatchError) -> Self {
        Self::json(
            dispatch_error_to_status_code(error),
            &json!({ "error": error.to_string() }),
        )
    }

    /// Parses the body back into a JSON value.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
