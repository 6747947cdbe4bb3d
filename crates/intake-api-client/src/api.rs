//! Domain methods for the intake API client.

use anyhow::{Context, Result};
use intake_core::{SelectedFile, StoredRecord};
use reqwest::multipart::{Form, Part};

use crate::ApiClient;

impl ApiClient {
    /// Upload every file in one multipart request, all under the configured field.
    ///
    /// The response body is returned as-is; the service only promises it is JSON.
    pub async fn upload_files(&self, files: &[SelectedFile]) -> Result<serde_json::Value> {
        let form = build_form(files, &self.endpoints().upload_field).await?;

        tracing::info!(
            count = files.len(),
            field = %self.endpoints().upload_field,
            "Uploading selection"
        );

        self.post_multipart(&self.endpoints().upload_path, form)
            .await
    }

    /// List records previously stored by the service.
    pub async fn list_records(&self) -> Result<Vec<StoredRecord>> {
        self.get(&self.endpoints().records_path).await
    }
}

/// Build the multipart body: one part per file, in selection order.
pub async fn build_form(files: &[SelectedFile], field: &str) -> Result<Form> {
    let mut form = Form::new();

    for file in files {
        let data = tokio::fs::read(file.path())
            .await
            .with_context(|| format!("Failed to read file: {}", file.path().display()))?;

        let mut part = Part::bytes(data).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            if file.mime_type.parse::<mime_guess::Mime>().is_ok() {
                part = part
                    .mime_str(&file.mime_type)
                    .with_context(|| format!("Invalid content type: {}", file.mime_type))?;
            } else {
                tracing::warn!(
                    name = %file.name,
                    mime_type = %file.mime_type,
                    "Declared type is not a valid MIME type, sending part without one"
                );
            }
        }

        form = form.part(field.to_string(), part);
    }

    Ok(form)
}
