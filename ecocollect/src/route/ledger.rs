//! Route ledger: the authority over stop completion state.

use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::notify::{Audience, Notifier, Severity};

use super::confirm::{CompletionConfirmer, ConfirmError};
use super::stop::{Stop, StopId, StopState};

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The requested stop is not on today's route.
    #[error("No stop with id {0} on today's route")]
    StopNotFound(StopId),

    /// Confirming the completion failed; the stop stays pending.
    #[error("Completion not confirmed: {0}")]
    Confirm(#[from] ConfirmError),
}

/// Outcome of a completion attempt.
///
/// Duplicate attempts are outcomes, not errors: completing a stop that is
/// already completed (or whose confirmation is still in flight) is a safe
/// no-op that the caller surfaces as an informational notice.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The transition was applied and the notifier informed.
    Confirmed(Stop),
    /// The stop was already completed; nothing changed, nobody was notified.
    AlreadyCompleted(Stop),
    /// Another completion for this stop is still awaiting confirmation.
    InFlight,
}

impl Completion {
    /// Returns true if this attempt applied the transition.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// Returns true if this attempt was a duplicate no-op.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::AlreadyCompleted(_) | Self::InFlight)
    }
}

/// In-memory authority over the day's route and its completion state.
///
/// The route is seeded at construction and never grows or shrinks; the only
/// mutation is the monotonic pending-to-completed transition performed by
/// [`complete`](Self::complete). Snapshots preserve route order.
///
/// # Concurrency
///
/// At most one confirmation may be in flight per stop. A second `complete`
/// call for the same stop while the first is awaiting confirmation returns
/// [`Completion::InFlight`] without a second confirmation round trip.
/// Completions of different stops are independent.
pub struct RouteLedger<C: CompletionConfirmer> {
    /// Today's stops, in route order.
    stops: RwLock<Vec<Stop>>,

    /// Stops whose confirmation round trip has started but not resolved.
    in_flight: DashMap<StopId, ()>,

    /// Confirmation seam awaited once per completion.
    confirmer: C,

    /// Dispatch target for completion messages.
    notifier: Arc<dyn Notifier>,
}

impl<C: CompletionConfirmer> RouteLedger<C> {
    /// Create a ledger over the given route.
    ///
    /// Stop ids must be unique within the route; the seeding collaborator is
    /// responsible for that.
    pub fn new(route: Vec<Stop>, confirmer: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            stops: RwLock::new(route),
            in_flight: DashMap::new(),
            confirmer,
            notifier,
        }
    }

    /// Number of stops on the route.
    pub fn len(&self) -> usize {
        self.stops.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns true if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the whole route, in route order.
    pub fn stops(&self) -> Vec<Stop> {
        self.stops.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Snapshot of the stops still pending, in route order.
    pub fn pending(&self) -> Vec<Stop> {
        self.filtered(StopState::Pending)
    }

    /// Snapshot of the completed stops, in route order.
    pub fn completed(&self) -> Vec<Stop> {
        self.filtered(StopState::Completed)
    }

    /// Look up one stop by id.
    pub fn stop(&self, stop_id: StopId) -> Option<Stop> {
        self.stops
            .read()
            .ok()
            .and_then(|s| s.iter().find(|stop| stop.id == stop_id).cloned())
    }

    fn filtered(&self, state: StopState) -> Vec<Stop> {
        self.stops
            .read()
            .map(|s| {
                s.iter()
                    .filter(|stop| stop.state == state)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Transition one stop from pending to completed.
    ///
    /// Awaits the confirmer once (the stand-in for a backend round trip),
    /// then applies the transition and notifies the stop's client. The
    /// message text differs by `via_scan` (certified-by-scan vs manual) but
    /// audience and severity are identical.
    ///
    /// The transition is monotonic and idempotent from the caller's
    /// perspective: completing an already-completed stop is a safe no-op
    /// reported as [`Completion::AlreadyCompleted`], with no second
    /// notification. An unknown id is [`LedgerError::StopNotFound`].
    pub async fn complete(
        &self,
        stop_id: StopId,
        via_scan: bool,
    ) -> Result<Completion, LedgerError> {
        let current = self
            .stop(stop_id)
            .ok_or(LedgerError::StopNotFound(stop_id))?;
        if current.is_completed() {
            debug!(stop = stop_id, "Completion skipped: already completed");
            return Ok(Completion::AlreadyCompleted(current));
        }

        if self.in_flight.insert(stop_id, ()).is_some() {
            debug!(stop = stop_id, "Completion skipped: confirmation in flight");
            return Ok(Completion::InFlight);
        }

        // Re-check under the guard: the stop may have completed while we
        // were reading.
        if let Some(stop) = self.stop(stop_id) {
            if stop.is_completed() {
                self.in_flight.remove(&stop_id);
                return Ok(Completion::AlreadyCompleted(stop));
            }
        }

        // Single await point. Once started, the confirmation runs to
        // resolution; there is no abort path back to pending.
        if let Err(e) = self.confirmer.confirm(stop_id).await {
            self.in_flight.remove(&stop_id);
            return Err(e.into());
        }

        let updated = {
            let mut stops = match self.stops.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match stops.iter_mut().find(|stop| stop.id == stop_id) {
                Some(stop) => {
                    stop.state = StopState::Completed;
                    stop.clone()
                }
                None => {
                    self.in_flight.remove(&stop_id);
                    return Err(LedgerError::StopNotFound(stop_id));
                }
            }
        };
        self.in_flight.remove(&stop_id);

        info!(stop = stop_id, via_scan, name = %updated.name, "Stop completed");

        let message = if via_scan {
            format!("Pickup at {} confirmed, certified by scan.", updated.name)
        } else {
            format!("Pickup at {} confirmed manually.", updated.name)
        };
        self.notifier.notify(
            Audience::Client(updated.name.clone()),
            "Collection completed",
            &message,
            Severity::Success,
        );

        Ok(Completion::Confirmed(updated))
    }
}
