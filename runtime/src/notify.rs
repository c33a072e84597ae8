//! Notification Sink - User-Visible Alerts
//!
//! Fire-and-forget (title, message, severity) triples. The controller
//! never consumes a return value; whatever the embedding UI does with the
//! triple is its business.

use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
    Info,
}

/// Accepts user-visible alerts. Implementations must not block.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        (**self).notify(title, message, severity)
    }
}

/// Sink that forwards alerts to `tracing` events.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Error => {
                tracing::warn!(alert.title = title, alert.message = message, "notification")
            }
            Severity::Success | Severity::Info => {
                tracing::info!(alert.title = title, alert.message = message, "notification")
            }
        }
    }
}

/// One captured alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Sink that records alerts for later inspection. Meant for tests and
/// headless embedding.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn recorded(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .expect("notification lock poisoned")
            .push(Notification {
                title: title.to_string(),
                message: message.to_string(),
                severity,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify("Error", "first", Severity::Error);
        sink.notify("Success", "second", Severity::Success);

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "first");
        assert_eq!(recorded[1].severity, Severity::Success);
    }
}
