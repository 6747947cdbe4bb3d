//! File intake & preview controller.
//!
//! Holds three independent pieces of state (the current selection, its previews and
//! the cached stored records) and re-derives them wholesale on every event.

use std::sync::Arc;

use intake_core::{IntakeConfig, IntakeError, IntakeResult, SelectedFile, StoredRecord};
use intake_processing::{PreviewEntry, PreviewGenerator, PreviewRegistry};

use crate::api::IntakeApi;
use crate::notifier::Notifier;

/// Alert shown when a submit is attempted with nothing selected
pub const NO_FILES_MESSAGE: &str = "No files selected.";
/// Alert shown after the service accepted a batch
pub const UPLOAD_COMPLETE_MESSAGE: &str = "Upload complete!";

/// Result of [`IntakeController::submit_selection`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was selected; the user was alerted and no request was made
    NoFiles,
    /// The service response, parsed as JSON
    Uploaded(serde_json::Value),
}

pub struct IntakeController {
    api: Arc<dyn IntakeApi>,
    notifier: Arc<dyn Notifier>,
    generator: PreviewGenerator,
    selection: Vec<SelectedFile>,
    previews: Vec<PreviewEntry>,
    records: Vec<StoredRecord>,
    records_requested: bool,
}

impl IntakeController {
    pub fn new(
        api: Arc<dyn IntakeApi>,
        notifier: Arc<dyn Notifier>,
        generator: PreviewGenerator,
    ) -> Self {
        Self {
            api,
            notifier,
            generator,
            selection: Vec::new(),
            previews: Vec::new(),
            records: Vec::new(),
            records_requested: false,
        }
    }

    pub fn from_config(
        config: &IntakeConfig,
        api: Arc<dyn IntakeApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let registry = PreviewRegistry::new(config.preview_base.clone());
        Self::new(
            api,
            notifier,
            PreviewGenerator::new(registry, config.preview_chars),
        )
    }

    pub fn selection(&self) -> &[SelectedFile] {
        &self.selection
    }

    pub fn previews(&self) -> &[PreviewEntry] {
        &self.previews
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    /// Registry backing the preview URLs of the current selection
    pub fn registry(&self) -> &PreviewRegistry {
        self.generator.registry()
    }

    /// React to a file-picker event.
    ///
    /// `None` means the picker was cancelled and nothing changes. Otherwise the held
    /// selection is replaced and its previews are rebuilt in order; the previous
    /// preview URLs are revoked once the new list is in place. If a text read fails
    /// the new selection is kept, the old previews stay, and the error is returned.
    pub async fn handle_selection(
        &mut self,
        picked: Option<Vec<SelectedFile>>,
    ) -> IntakeResult<&[PreviewEntry]> {
        let Some(files) = picked else {
            tracing::debug!("File selection cancelled");
            return Ok(&self.previews);
        };

        tracing::info!(count = files.len(), "Files selected");
        self.selection = files;

        let previews = self.generator.generate(&self.selection).await?;
        self.previews = previews;

        Ok(&self.previews)
    }

    /// Upload the held selection as one multipart batch.
    ///
    /// Any JSON answer counts as completion, whatever its status. Network and
    /// decode failures are returned.
    pub async fn submit_selection(&self) -> IntakeResult<SubmitOutcome> {
        if self.selection.is_empty() {
            self.notifier.alert(NO_FILES_MESSAGE);
            return Ok(SubmitOutcome::NoFiles);
        }

        let result = self
            .api
            .upload_files(&self.selection)
            .await
            .map_err(IntakeError::from)?;

        tracing::info!(result = %result, "Upload result");
        self.notifier.alert(UPLOAD_COMPLETE_MESSAGE);

        Ok(SubmitOutcome::Uploaded(result))
    }

    /// Fetch the stored record list. Only the first call reaches the service.
    ///
    /// Failures are logged and leave the cache empty; the user is not notified.
    pub async fn load_stored_records(&mut self) -> &[StoredRecord] {
        if self.records_requested {
            tracing::debug!("Stored records already requested, skipping");
            return &self.records;
        }
        self.records_requested = true;

        match self.api.list_records().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Loaded stored records");
                self.records = records;
            }
            Err(e) => IntakeError::from(e).log("Failed to load stored records"),
        }

        &self.records
    }
}
