//! Stop model for a collector's daily route.

use std::fmt;

/// Identifier of a stop, unique within one day's route.
pub type StopId = u32;

/// Completion state of a stop.
///
/// A stop is always in exactly one of these two states. The transition is
/// one-way: once `Completed`, a stop never reverts within the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopState {
    /// Not yet serviced.
    #[default]
    Pending,
    /// Serviced and confirmed.
    Completed,
}

impl StopState {
    /// Returns true if the stop has not been serviced yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the stop has been serviced and confirmed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// One planned pickup on a collector's route for the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Identifier, unique within the day's route.
    pub id: StopId,
    /// Display name of the serviced client (household, shop, ...).
    pub name: String,
    /// Street address.
    pub address: String,
    /// Waste category label, e.g. "Organic" or "Glass".
    pub category: String,
    /// Scheduled time label, e.g. "08:30".
    pub scheduled: String,
    /// Expected code payload for scan-based confirmation, if one was issued.
    pub expected_code: Option<String>,
    /// Completion state.
    pub state: StopState,
}

impl Stop {
    /// Create a pending stop without an expected code.
    pub fn new(
        id: StopId,
        name: impl Into<String>,
        address: impl Into<String>,
        category: impl Into<String>,
        scheduled: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            category: category.into(),
            scheduled: scheduled.into(),
            expected_code: None,
            state: StopState::Pending,
        }
    }

    /// Attach the code payload this stop's label carries.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.expected_code = Some(code.into());
        self
    }

    /// Returns true if the stop has not been serviced yet.
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Returns true if the stop has been serviced and confirmed.
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stop_is_pending() {
        let stop = Stop::new(1, "Café Riviera", "4 Quai des Arts", "Glass", "09:15");
        assert!(stop.is_pending());
        assert!(!stop.is_completed());
        assert!(stop.expected_code.is_none());
    }

    #[test]
    fn test_with_code() {
        let stop = Stop::new(1, "Café Riviera", "4 Quai des Arts", "Glass", "09:15")
            .with_code("ECO-STOP-001");
        assert_eq!(stop.expected_code.as_deref(), Some("ECO-STOP-001"));
    }

    #[test]
    fn test_state_predicates() {
        assert!(StopState::Pending.is_pending());
        assert!(!StopState::Pending.is_completed());
        assert!(StopState::Completed.is_completed());
        assert!(!StopState::Completed.is_pending());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(StopState::Pending.to_string(), "pending");
        assert_eq!(StopState::Completed.to_string(), "completed");
    }

    #[test]
    fn test_state_default() {
        assert_eq!(StopState::default(), StopState::Pending);
    }
}
