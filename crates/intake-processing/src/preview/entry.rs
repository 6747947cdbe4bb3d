use serde::{Serialize, Serializer};

use super::PreviewUrl;

/// Preview of one selected file. Exactly one variant per file; a preview URL and
/// a text snippet never appear together.
#[derive(Debug)]
pub enum PreviewEntry {
    /// Unsupported or unknown type: name only
    Opaque { name: String },
    Image { name: String, preview_url: PreviewUrl },
    Text { name: String, text_snippet: String },
}

impl PreviewEntry {
    pub fn name(&self) -> &str {
        match self {
            PreviewEntry::Opaque { name }
            | PreviewEntry::Image { name, .. }
            | PreviewEntry::Text { name, .. } => name,
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        match self {
            PreviewEntry::Image { preview_url, .. } => Some(preview_url.as_str()),
            _ => None,
        }
    }

    pub fn text_snippet(&self) -> Option<&str> {
        match self {
            PreviewEntry::Text { text_snippet, .. } => Some(text_snippet),
            _ => None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewView<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_snippet: Option<&'a str>,
}

impl Serialize for PreviewEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PreviewView {
            name: self.name(),
            preview_url: self.preview_url(),
            text_snippet: self.text_snippet(),
        }
        .serialize(serializer)
    }
}
