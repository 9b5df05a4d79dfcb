//! Transient user notifications
//!
//! Stand-in for the site's toast layer. Flows that complete asynchronously
//! push a [`Notification`] through an injected [`Notifier`]; the default
//! sink logs, tests use [`MemoryNotifier`] to assert on what was shown.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// One transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for transient notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: structured log output
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.body)
            }
            _ => tracing::info!(title = %notification.title, "{}", notification.body),
        }
    }
}

/// Collecting sink for tests and the demo walk-through
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, in order
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.shown
            .lock()
            .expect("notifier lock poisoned")
            .push(notification);
    }
}
