//! Shared server state.

use std::sync::Arc;

use intake_core::{IntakeConfig, IntakeResult};
use intake_processing::PreviewRegistry;
use intake_services::{IntakeApi, IntakeController, RecordingNotifier};
use tempfile::TempDir;
use tokio::sync::Mutex;

use crate::staging::StagedSelection;

/// One browser session's worth of intake state.
pub struct Session {
    pub controller: IntakeController,
    /// Directories backing the current selection and the previews on screen
    staging: Vec<TempDir>,
}

impl Session {
    /// Hand a staged browser pick to the controller; returns the preview count.
    ///
    /// On success the staged directory becomes the only one kept. On failure it is
    /// kept next to the older ones: the new selection lives in it while the
    /// previews still on screen point into the older directories.
    pub async fn apply_selection(&mut self, staged: StagedSelection) -> IntakeResult<usize> {
        let rebuilt = self
            .controller
            .handle_selection(Some(staged.files))
            .await
            .map(|previews| previews.len());

        match rebuilt {
            Ok(count) => {
                self.replace_staging(staged.dir);
                Ok(count)
            }
            Err(e) => {
                self.staging.push(staged.dir);
                Err(e)
            }
        }
    }

    /// Make `dir` the only staging directory; earlier ones are deleted.
    fn replace_staging(&mut self, dir: TempDir) {
        for old in self.staging.drain(..) {
            tracing::debug!(path = %old.path().display(), "Releasing staging directory");
        }
        self.staging.push(dir);
    }

    pub fn staging_count(&self) -> usize {
        self.staging.len()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    /// Shared with the controller; resolves preview URLs without taking the session lock
    pub registry: PreviewRegistry,
    /// Alerts raised by the controller, shown on the next page render
    pub alerts: RecordingNotifier,
    pub upload_field: String,
}

impl AppState {
    pub fn new(config: &IntakeConfig, api: Arc<dyn IntakeApi>) -> Self {
        let alerts = RecordingNotifier::new();
        let controller = IntakeController::from_config(config, api, Arc::new(alerts.clone()));
        let registry = controller.registry().clone();

        Self {
            session: Arc::new(Mutex::new(Session {
                controller,
                staging: Vec::new(),
            })),
            registry,
            alerts,
            upload_field: config.upload_field.clone(),
        }
    }

    /// Fetch stored records; called once when the server starts.
    pub async fn load_records(&self) -> usize {
        let mut session = self.session.lock().await;
        session.controller.load_stored_records().await.len()
    }
}
