//! Preview derivation for a selection.
//!
//! - [`PreviewRegistry`] hands out preview URLs and resolves them back to files.
//! - [`PreviewUrl`] is the scoped handle; dropping it revokes the URL.
//! - [`PreviewEntry`] is the per-file preview.
//! - [`PreviewGenerator`] runs the classification loop over a selection.

mod entry;
mod generator;
mod registry;

pub use entry::PreviewEntry;
pub use generator::PreviewGenerator;
pub use registry::{PreviewRegistry, PreviewSource, PreviewUrl};
