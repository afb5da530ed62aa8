//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use health_records_core::record::{AttributePatch, HealthRecord};
use health_records_core::storage::{RecordStore, RepositoryError, Result};

/// In-memory storage backend.
///
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<String, HealthRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRepository {
    async fn get_record(&self, record_id: &str) -> Result<Option<HealthRecord>> {
        let records = self.records.read().await;
        Ok(records.get(record_id).cloned())
    }

    async fn put_record(&self, record: &HealthRecord) -> Result<()> {
        let record_id = record
            .record_id()
            .ok_or_else(RepositoryError::missing_record_id)?;

        let mut records = self.records.write().await;
        records.insert(record_id.to_string(), record.clone());
        Ok(())
    }

    async fn update_attributes(&self, record_id: &str, patch: &AttributePatch) -> Result<()> {
        let mut records = self.records.write().await;
        // A missing ID is left alone; no record is created.
        if let Some(record) = records.get_mut(record_id) {
            patch.apply_to(record);
        }
        Ok(())
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(record_id);
        Ok(())
    }

    async fn scan_records(&self) -> Result<Vec<HealthRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}
