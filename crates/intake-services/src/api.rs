//! Remote service seam used by the controller.

use async_trait::async_trait;
use intake_api_client::ApiClient;
use intake_core::{SelectedFile, StoredRecord};

/// Remote file-collection service
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// Submit the whole batch in one request; returns the parsed JSON response.
    async fn upload_files(&self, files: &[SelectedFile]) -> anyhow::Result<serde_json::Value>;

    async fn list_records(&self) -> anyhow::Result<Vec<StoredRecord>>;
}

#[async_trait]
impl IntakeApi for ApiClient {
    async fn upload_files(&self, files: &[SelectedFile]) -> anyhow::Result<serde_json::Value> {
        ApiClient::upload_files(self, files).await
    }

    async fn list_records(&self) -> anyhow::Result<Vec<StoredRecord>> {
        ApiClient::list_records(self).await
    }
}
