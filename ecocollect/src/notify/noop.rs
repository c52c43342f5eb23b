//! No-operation notifier implementation.

use crate::notify::{Audience, Notifier, Severity};

/// A notifier that discards all messages.
///
/// Useful for:
/// - Unit tests where notification dispatch would be noise
/// - Benchmarks where dispatch overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use ecocollect::notify::{Audience, NoOpNotifier, Notifier, Severity};
/// use std::sync::Arc;
///
/// let notifier: Arc<dyn Notifier> = Arc::new(NoOpNotifier);
/// notifier.notify(Audience::All, "Ignored", "This message is discarded", Severity::Info);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    #[inline]
    fn notify(&self, _audience: Audience, _title: &str, _message: &str, _severity: Severity) {
        // Intentionally empty - discard all notifications
    }
}
