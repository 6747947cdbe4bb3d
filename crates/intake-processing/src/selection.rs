//! Building a selection from local paths.

use std::io;
use std::path::Path;

use intake_core::{IntakeError, IntakeResult, SelectedFile};

/// Declared MIME type for a path, guessed from its extension.
///
/// Unknown extensions yield an empty string, like a browser file picker does.
pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default()
}

/// Stat every path and build the ordered selection.
pub async fn select_paths<P: AsRef<Path>>(paths: &[P]) -> IntakeResult<Vec<SelectedFile>> {
    let mut selection = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            IntakeError::Io(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;

        if !metadata.is_file() {
            return Err(IntakeError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = SelectedFile::new(name, metadata.len(), guess_mime_type(path), path);
        tracing::debug!(
            name = %file.name,
            size = file.size,
            mime_type = %file.mime_type,
            "Selected file"
        );
        selection.push(file);
    }

    Ok(selection)
}
