//! Askama templates for the intake page.
//!
//! `index.html` pulls in `gallery.html`, `selection.html` and `previews.html`;
//! all of them share the fields of [`IndexTemplate`].

use askama::Template;
use intake_core::{SelectedFile, StoredRecord};
use intake_processing::PreviewEntry;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub records: &'a [StoredRecord],
    pub selection: &'a [SelectedFile],
    pub previews: &'a [PreviewEntry],
    /// Already quoted with [`script_string`]
    pub alerts: Vec<String>,
    /// Name of the file input, so posted parts land under the upload field
    pub upload_field: &'a str,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(
        records: &'a [StoredRecord],
        selection: &'a [SelectedFile],
        previews: &'a [PreviewEntry],
        alerts: &[String],
        upload_field: &'a str,
    ) -> Self {
        Self {
            records,
            selection,
            previews,
            alerts: alerts.iter().map(|alert| script_string(alert)).collect(),
            upload_field,
        }
    }
}

/// One `<img>` per stored record, in service order.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate<'a> {
    pub records: &'a [StoredRecord],
}

pub fn gallery(records: &[StoredRecord]) -> askama::Result<String> {
    GalleryTemplate { records }.render()
}

/// Quote a string as a JavaScript literal that is safe inside a `<script>` element.
pub fn script_string(input: &str) -> String {
    serde_json::to_string(input)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
