//! Payload-to-stop resolution policy.
//!
//! Maps a decoded code payload to one stop of the day's route. The payload
//! is treated as opaque text; resolution is deterministic and
//! first-match-wins, in this priority order:
//!
//! 1. Exact match against a stop's expected code.
//! 2. Fallback: the payload textually contains a stop's display name.
//! 3. Fallback (demo rule): the payload equals [`DEMO_CODE`] or contains
//!    [`PLATFORM_TAG`], which selects the earliest pending stop in route
//!    order. Demo labels printed for staging routes carry these values.
//! 4. Anything else is unrecognized.
//!
//! A payload that resolves to an already-completed stop is reported as
//! [`MatchResolution::AlreadyCollected`], distinct from
//! [`MatchResolution::Unrecognized`]: the first is a duplicate attempt on a
//! known stop, the second is a code the route knows nothing about.

use crate::route::{Stop, StopId};

/// Payload printed on demo labels; always matches the next pending stop.
pub const DEMO_CODE: &str = "ECO-DEMO";

/// Platform tag embedded in labels issued by the platform itself.
pub const PLATFORM_TAG: &str = "ECOCOLLECT";

/// Result of resolving a payload against the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResolution {
    /// The payload identifies this pending stop.
    Matched(StopId),
    /// The payload identifies this stop, but it was already completed.
    AlreadyCollected(StopId),
    /// The payload identifies no stop on the route.
    Unrecognized,
}

/// Resolve a decoded payload to a stop of the given route.
///
/// `stops` must be in route order; the demo fallback picks the earliest
/// pending stop from it. The function never mutates anything - applying the
/// completion transition is the ledger's job.
pub fn resolve_payload(payload: &str, stops: &[Stop]) -> MatchResolution {
    // 1. Exact expected-code match.
    if let Some(stop) = stops
        .iter()
        .find(|s| s.expected_code.as_deref() == Some(payload))
    {
        return resolution_for(stop);
    }

    // 2. The payload embeds a stop's display name.
    if let Some(stop) = stops
        .iter()
        .find(|s| !s.name.is_empty() && payload.contains(&s.name))
    {
        return resolution_for(stop);
    }

    // 3. Demo labels match the earliest pending stop.
    if payload == DEMO_CODE || payload.contains(PLATFORM_TAG) {
        if let Some(stop) = stops.iter().find(|s| s.is_pending()) {
            return MatchResolution::Matched(stop.id);
        }
    }

    MatchResolution::Unrecognized
}

fn resolution_for(stop: &Stop) -> MatchResolution {
    if stop.is_completed() {
        MatchResolution::AlreadyCollected(stop.id)
    } else {
        MatchResolution::Matched(stop.id)
    }
}
