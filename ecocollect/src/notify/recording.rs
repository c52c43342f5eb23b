//! Recording notifier implementation.

use std::sync::Mutex;

use crate::notify::{Audience, Notification, Notifier, Severity};

/// A notifier that captures every dispatched message.
///
/// Intended for tests that assert on notification behavior: which audience
/// was addressed, how often dispatch happened, and what the message said.
///
/// # Example
///
/// ```
/// use ecocollect::notify::{Audience, Notifier, RecordingNotifier, Severity};
///
/// let notifier = RecordingNotifier::new();
/// notifier.notify(Audience::Admin, "Route done", "All stops completed.", Severity::Success);
///
/// assert_eq!(notifier.count(), 1);
/// assert_eq!(notifier.notifications()[0].audience, Audience::Admin);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured notifications, in dispatch order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// Number of notifications dispatched so far.
    pub fn count(&self) -> usize {
        self.sent.lock().map(|sent| sent.len()).unwrap_or(0)
    }

    /// Discard all captured notifications.
    pub fn clear(&self) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, audience: Audience, title: &str, message: &str, severity: Severity) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(Notification {
                audience,
                title: title.to_string(),
                message: message.to_string(),
                severity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let notifier = RecordingNotifier::new();
        assert_eq!(notifier.count(), 0);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_captures_in_dispatch_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Audience::Admin, "first", "a", Severity::Info);
        notifier.notify(Audience::All, "second", "b", Severity::Warning);

        let sent = notifier.notifications();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].title, "first");
        assert_eq!(sent[1].title, "second");
        assert_eq!(sent[1].severity, Severity::Warning);
    }

    #[test]
    fn test_clear_discards_captured() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Audience::Admin, "title", "message", Severity::Info);
        assert_eq!(notifier.count(), 1);

        notifier.clear();
        assert_eq!(notifier.count(), 0);
    }
}
