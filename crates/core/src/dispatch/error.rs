use thiserror::Error;

use crate::record::PayloadError;
use crate::storage::RepositoryError;

/// Errors produced while dispatching a single request.
///
/// Every variant is turned into a response by the dispatcher; none escapes
/// the request that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid route key")]
    InvalidRoute,
    #[error("Record ID is required for update")]
    MissingUpdateId,
    #[error("Record ID is required for deletion")]
    MissingDeleteId,
    #[error("Health record not found")]
    NotFound,
    /// Store failure or unreadable body. The message is the underlying error text.
    #[error("{0}")]
    Backend(String),
}

impl From<RepositoryError> for DispatchError {
    fn from(error: RepositoryError) -> Self {
        Self::Backend(error.to_string())
    }
}

impl From<PayloadError> for DispatchError {
    fn from(error: PayloadError) -> Self {
        Self::Backend(error.to_string())
    }
}
