use async_trait::async_trait;

use crate::record::{AttributePatch, HealthRecord};

use super::Result;

/// Persistent table of health records keyed by `recordId`.
///
/// Implementations own all persisted state. Callers assume no ordering,
/// consistency, or existence guarantees beyond what each method states.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets a record by its ID.
    async fn get_record(&self, record_id: &str) -> Result<Option<HealthRecord>>;

    /// Writes a record, replacing any record with the same ID.
    ///
    /// Fails with [`RepositoryError::InvalidData`](super::RepositoryError::InvalidData)
    /// when the record has no string `recordId`.
    async fn put_record(&self, record: &HealthRecord) -> Result<()>;

    /// Sets `attribute1` and `attribute2` on the record, leaving every other field as is.
    ///
    /// What happens when the ID does not exist is up to the backend.
    async fn update_attributes(&self, record_id: &str, patch: &AttributePatch) -> Result<()>;

    /// Deletes a record by its ID. Deleting a missing ID is not an error.
    async fn delete_record(&self, record_id: &str) -> Result<()>;

    /// Returns every record in the table, in no particular order.
    async fn scan_records(&self) -> Result<Vec<HealthRecord>>;
}
