/// Classification of a declared MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*`: previewed through a preview URL
    Image,
    /// `text/*`: previewed through a text snippet
    Text,
    /// Anything else, including an empty type
    Other,
}

impl MediaKind {
    /// Classify a declared MIME type by its top-level prefix.
    ///
    /// The comparison ignores ASCII case; parameters such as `; charset=utf-8`
    /// do not affect the result.
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.trim_start();
        if has_prefix(mime, "image/") {
            MediaKind::Image
        } else if has_prefix(mime, "text/") {
            MediaKind::Text
        } else {
            MediaKind::Other
        }
    }
}

fn has_prefix(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
