//! Data models
//!
//! Local selections, their media classification, and the records owned by the
//! remote collection service.

mod media;
mod record;
mod selected_file;

pub use media::MediaKind;
pub use record::StoredRecord;
pub use selected_file::SelectedFile;
