//! User-facing notifications.

use std::sync::{Arc, Mutex};

/// Blocking, user-visible notification channel
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}

/// Keeps every alert in memory, in order.
///
/// Used by front ends that render alerts later (the dev server shows them on the
/// next page load) and by tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Remove and return all pending alerts.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(
            &mut *self
                .alerts
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        tracing::debug!(alert = %message, "Alert recorded");
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
