//! Text decoding and snippet helpers.

use std::borrow::Cow;

/// Decode file bytes the way a browser's `File.text()` does: UTF-8 with
/// replacement characters, leading byte-order mark removed.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// First `max_chars` characters of `text` (Unicode scalar values, never splits one).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
