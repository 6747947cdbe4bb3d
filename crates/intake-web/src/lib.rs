//! Intake development server.
//!
//! Serves the intake page (stored images, upload button, file picker, selected
//! files and their previews) and drives the [`IntakeController`](intake_services::IntakeController)
//! from plain browser form posts.

pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod server;
pub mod staging;
pub mod state;

pub use routes::setup_routes;
pub use server::{serve, start_server};
pub use state::AppState;
