//! Staging of browser-picked files.
//!
//! Each posted part is written to a fresh temporary directory so the controller
//! can treat browser uploads exactly like files picked from disk.

use axum::extract::Multipart;
use intake_core::{IntakeError, SelectedFile};
use tempfile::TempDir;

use crate::error::HttpError;

/// Files from one picker post, backed by their staging directory
pub struct StagedSelection {
    pub dir: TempDir,
    pub files: Vec<SelectedFile>,
}

/// Write every file part posted under `field` to a new staging directory.
///
/// Returns `None` when the post carried no files, which browsers send when the
/// picker is dismissed.
pub async fn stage_multipart(
    mut multipart: Multipart,
    field: &str,
) -> Result<Option<StagedSelection>, HttpError> {
    let dir = tempfile::tempdir().map_err(IntakeError::from)?;
    let mut files = Vec::new();

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::bad_request(format!("Failed to read multipart: {}", e)))?
    {
        if part.name() != Some(field) {
            tracing::debug!(name = ?part.name(), "Ignoring unexpected multipart field");
            continue;
        }

        let name = match part.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let mime_type = part.content_type().unwrap_or_default().to_string();

        let data = part
            .bytes()
            .await
            .map_err(|e| HttpError::bad_request(format!("Failed to read file data: {}", e)))?;

        // Index-named so duplicate file names in one batch never collide
        let path = dir.path().join(files.len().to_string());
        tokio::fs::write(&path, &data)
            .await
            .map_err(IntakeError::from)?;

        tracing::debug!(name = %name, size = data.len(), mime_type = %mime_type, "Staged file");
        files.push(SelectedFile::new(name, data.len() as u64, mime_type, path));
    }

    if files.is_empty() {
        return Ok(None);
    }

    Ok(Some(StagedSelection { dir, files }))
}
