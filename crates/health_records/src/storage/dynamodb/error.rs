//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `health_records_core::storage`.
//! All five table operations share one mapping, keyed on the service error code.

use std::fmt::{Debug, Display};

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use health_records_core::storage::RepositoryError;

/// Operations issued against the records table, used in fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOperation {
    GetItem,
    PutItem,
    UpdateItem,
    DeleteItem,
    Scan,
}

impl Display for TableOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GetItem => "GetItem",
            Self::PutItem => "PutItem",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
            Self::Scan => "Scan",
        };
        f.write_str(name)
    }
}

/// Message for service error codes any table operation can return.
fn known_failure_message(code: &str) -> Option<&'static str> {
    match code {
        "ResourceNotFoundException" => Some("Table not found"),
        "ProvisionedThroughputExceededException" => Some("Throughput exceeded, please retry"),
        "RequestLimitExceeded" => Some("Request limit exceeded, please retry"),
        "ItemCollectionSizeLimitExceededException" => Some("Item collection size limit exceeded"),
        "TransactionConflictException" => Some("Transaction conflict, please retry"),
        "InternalServerError" => Some("DynamoDB internal server error"),
        _ => None,
    }
}

/// Map failures that never reached DynamoDB to `ConnectionFailed`.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "Request to DynamoDB timed out".to_string(),
        )),
        SdkError::DispatchFailure(_) => Some(RepositoryError::ConnectionFailed(
            "Could not send request to DynamoDB".to_string(),
        )),
        _ => None,
    }
}

/// Map an SDK error from any table operation to RepositoryError.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>, operation: TableOperation) -> RepositoryError
where
    E: ProvideErrorMetadata + Display + Debug,
    R: Debug,
{
    if let Some(error) = map_transport_error(&err) {
        return error;
    }

    if let Some(message) = err.code().and_then(known_failure_message) {
        return RepositoryError::QueryFailed(message.to_string());
    }

    match err.as_service_error() {
        Some(service_error) => {
            RepositoryError::QueryFailed(format!("{operation} failed: {service_error}"))
        }
        None => RepositoryError::QueryFailed(format!("{operation} failed: {err:?}")),
    }
}
