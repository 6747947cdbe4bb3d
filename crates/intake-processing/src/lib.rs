//! Intake Processing Library
//!
//! Turns picked files into [`SelectedFile`](intake_core::SelectedFile)s and derives the
//! preview list for a selection. Image previews are handed out as scoped
//! [`PreviewUrl`]s that are revoked when dropped.

pub mod preview;
pub mod selection;
pub mod text;

pub use preview::{PreviewEntry, PreviewGenerator, PreviewRegistry, PreviewSource, PreviewUrl};
pub use selection::{guess_mime_type, select_paths};
pub use text::{decode_text, truncate_chars};
