//! User notification abstraction.
//!
//! `NotificationSink` is the presentation seam — every terminal or blocking
//! condition in the import flow produces exactly one call here. Swap in
//! `LogNotifier` for production/dev (writes to tracing) and `FakeNotifier`
//! in tests.
//!
//! The trait is object-safe so callers can hold `Arc<dyn NotificationSink>`.

use std::sync::Mutex;

use tracing::{error, info, warn};

// =============================================================================
// Core trait
// =============================================================================

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Abstraction over the notification presentation. Purely one-way: no
/// return value is consumed.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

// =============================================================================
// LogNotifier — writes to tracing (production / dev)
// =============================================================================

pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => info!(title, "{}", message),
            Severity::Warning => warn!(title, "{}", message),
            Severity::Error => error!(title, "{}", message),
        }
    }
}

// =============================================================================
// FakeNotifier — captures notifications in a Vec (tests)
// =============================================================================

/// Collects notifications in memory for assertion in tests.
#[derive(Default)]
pub struct FakeNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl NotificationSink for FakeNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.notifications.lock().unwrap().push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        });
    }
}
