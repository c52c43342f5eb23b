//! Completion confirmation seam.
//!
//! [`RouteLedger::complete`](super::RouteLedger::complete) awaits exactly one
//! confirmation before applying the completion transition. The
//! [`CompletionConfirmer`] trait isolates that single await point so the
//! shipped [`SimulatedConfirmer`] (a fixed-duration delay standing in for a
//! backend round trip) can later be swapped for a real network call without
//! changing the ledger's contract.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use super::StopId;

/// Default simulated confirmation latency.
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 1_500;

/// Errors that can occur while confirming a completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmError {
    /// The confirmation transport failed (network, backend outage, ...).
    #[error("Confirmation transport failed: {0}")]
    Transport(String),
}

/// Trait for confirming a stop completion with an upstream authority.
///
/// `confirm` is awaited once per completion attempt. Once it has been
/// started it runs to resolution; the ledger offers no way to abort an
/// in-flight confirmation.
pub trait CompletionConfirmer: Send + Sync {
    /// Confirms the completion of the given stop.
    fn confirm(&self, stop_id: StopId) -> impl Future<Output = Result<(), ConfirmError>> + Send;
}

/// Confirmer that resolves after a fixed delay, simulating a network
/// round trip.
///
/// # Example
///
/// ```ignore
/// use ecocollect::route::SimulatedConfirmer;
/// use std::time::Duration;
///
/// let confirmer = SimulatedConfirmer::new(Duration::from_millis(500));
/// confirmer.confirm(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedConfirmer {
    delay: Duration,
}

impl SimulatedConfirmer {
    /// Create a confirmer with the given resolution delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the configured resolution delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedConfirmer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS))
    }
}

impl CompletionConfirmer for SimulatedConfirmer {
    fn confirm(&self, stop_id: StopId) -> impl Future<Output = Result<(), ConfirmError>> + Send {
        let delay = self.delay;
        async move {
            trace!(stop = stop_id, delay_ms = delay.as_millis() as u64, "Simulating confirmation round trip");
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}
