//! Route model and completion ledger.
//!
//! This module owns the day's pickup route: the [`Stop`] model, the
//! [`RouteLedger`] that applies the pending-to-completed transition, and the
//! [`CompletionConfirmer`] seam that stands in for the confirmation round
//! trip to a backend.
//!
//! # Lifecycle
//!
//! The route is seeded once at ledger construction. Stops are never created
//! or deleted afterwards; the only mutation is the monotonic completion
//! transition performed by [`RouteLedger::complete`].

mod confirm;
mod ledger;
mod stop;

pub use confirm::{CompletionConfirmer, ConfirmError, SimulatedConfirmer, DEFAULT_CONFIRM_DELAY_MS};
pub use ledger::{Completion, LedgerError, RouteLedger};
pub use stop::{Stop, StopId, StopState};
