//! Console notifier for CLI sessions.

use ecocollect::notify::{Audience, Notifier, Severity};

/// Notifier that prints dispatched messages to stdout.
///
/// The CLI stands in for the platform's delivery layer, so messages the
/// workflow addresses to clients or administrators are shown inline with
/// the session output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, audience: Audience, title: &str, message: &str, severity: Severity) {
        println!("  [{}] ({}) {}: {}", audience, severity, title, message);
    }
}
