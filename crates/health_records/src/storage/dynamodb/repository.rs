//! DynamoDB repository implementation.
//!
//! Implements [`RecordStore`] from `health_records_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use health_records_core::record::{AttributePatch, HealthRecord};
use health_records_core::storage::{RecordStore, Result};

use super::conversions::{item_to_record, record_key, record_to_item, value_to_attribute};
use super::error::{map_sdk_error, TableOperation};
use crate::config::Config;

const UPDATE_EXPRESSION: &str = "SET #attr1 = :val1, #attr2 = :val2";

/// DynamoDB-based record store.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. When `dynamodb_endpoint_url`
    /// is set, requests go to that endpoint instead (e.g. DynamoDB Local).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint_url) = &config.dynamodb_endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), &config.table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbRepository {
    async fn get_record(&self, record_id: &str) -> Result<Option<HealthRecord>> {
        let (key_name, key_value) = record_key(record_id);
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, TableOperation::GetItem))?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn put_record(&self, record: &HealthRecord) -> Result<()> {
        let item = record_to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, TableOperation::PutItem))?;

        Ok(())
    }

    async fn update_attributes(&self, record_id: &str, patch: &AttributePatch) -> Result<()> {
        let (key_name, key_value) = record_key(record_id);
        let [(name1, value1), (name2, value2)] = patch.fields();

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#attr1", name1)
            .expression_attribute_names("#attr2", name2)
            .expression_attribute_values(":val1", value_to_attribute(value1))
            .expression_attribute_values(":val2", value_to_attribute(value2))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, TableOperation::UpdateItem))?;

        Ok(())
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        let (key_name, key_value) = record_key(record_id);

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, TableOperation::DeleteItem))?;

        Ok(())
    }

    async fn scan_records(&self) -> Result<Vec<HealthRecord>> {
        let mut records = Vec::new();
        let mut start_key = None;

        // Scan returns at most 1 MB per call; follow LastEvaluatedKey to the end.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_sdk_error(e, TableOperation::Scan))?;

            for item in output.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            start_key = output.last_evaluated_key.filter(|key| !key.is_empty());
            if start_key.is_none() {
                break;
            }
        }

        tracing::debug!(table = %self.table_name, count = records.len(), "Scanned table");
        Ok(records)
    }
}
