//! Notifier trait definition.

use std::fmt;

/// Recipient of a dispatched notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// A single client, identified by display name
    Client(String),
    /// The administrative audience
    Admin,
    /// Every connected user
    All,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(name) => write!(f, "client:{}", name),
            Self::Admin => write!(f, "admin"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Severity of a dispatched notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// General information
    Info,
    /// A state change completed successfully
    Success,
    /// Something needs the recipient's attention
    Warning,
    /// An urgent condition
    Alert,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

/// One dispatched notification, as captured by [`super::RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient of the message.
    pub audience: Audience,
    /// Short headline.
    pub title: String,
    /// Message body.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
}

/// Message-dispatch interface for workflow components.
///
/// Implementations deliver a short message to a target audience. Delivery is
/// fire-and-forget; callers never await or inspect a result, so a failed
/// delivery must be handled (or swallowed) by the implementation.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across tasks.
pub trait Notifier: Send + Sync {
    /// Dispatch a message to the given audience.
    fn notify(&self, audience: Audience, title: &str, message: &str, severity: Severity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_display() {
        assert_eq!(Audience::Admin.to_string(), "admin");
        assert_eq!(Audience::All.to_string(), "all");
        assert_eq!(
            Audience::Client("Café Riviera".to_string()).to_string(),
            "client:Café Riviera"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Alert.to_string(), "alert");
    }

    #[test]
    fn test_audience_equality() {
        assert_eq!(Audience::Admin, Audience::Admin);
        assert_ne!(Audience::Admin, Audience::All);
        assert_ne!(
            Audience::Client("a".to_string()),
            Audience::Client("b".to_string())
        );
    }
}
