use std::path::{Path, PathBuf};

use super::MediaKind;

/// A local file picked for the current upload cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// Declared MIME type; may be empty or wrong
    pub mime_type: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }

    /// Size rounded to whole kilobytes, as shown in selection listings
    pub fn size_kb(&self) -> u64 {
        (self.size as f64 / 1024.0).round() as u64
    }
}
