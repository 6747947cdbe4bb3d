//! Intake Services
//!
//! The file intake & preview controller and the seams it talks through:
//! [`IntakeApi`] for the remote service and [`Notifier`] for user-facing signals.

pub mod api;
pub mod controller;
pub mod notifier;

pub use api::IntakeApi;
pub use controller::{IntakeController, SubmitOutcome};
pub use notifier::{ConsoleNotifier, Notifier, RecordingNotifier};
