//! Tracing library adapter implementation.

use crate::notify::{Audience, Notifier, Severity};

/// Notifier implementation that delegates to the `tracing` crate.
///
/// This adapter bridges the `Notifier` trait to the `tracing` ecosystem,
/// so that dispatched messages land in the same log output as the rest of
/// the application while keeping workflow code decoupled from `tracing`.
///
/// Severity maps onto log levels: `Info` and `Success` log at info,
/// `Warning` at warn, `Alert` at error.
///
/// # Example
///
/// ```ignore
/// use ecocollect::notify::{Notifier, TracingNotifier};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create a new tracing notifier adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, audience: Audience, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Info | Severity::Success => {
                tracing::info!(audience = %audience, severity = %severity, title, "{}", message)
            }
            Severity::Warning => {
                tracing::warn!(audience = %audience, severity = %severity, title, "{}", message)
            }
            Severity::Alert => {
                tracing::error!(audience = %audience, severity = %severity, title, "{}", message)
            }
        }
    }
}
