//! Intake Core Library
//!
//! This crate provides the domain models, error type and configuration shared by
//! every intake component: the selection/preview pipeline, the HTTP client, the
//! controller and the front ends.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{parse_dev_port, IntakeConfig, DEFAULT_DEV_PORT};
pub use error::{IntakeError, IntakeResult};
pub use models::{MediaKind, SelectedFile, StoredRecord};
