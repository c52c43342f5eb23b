//! Collection service facade.

use std::sync::Arc;

use tracing::{info, warn};

use crate::matcher::{self, MatchResolution};
use crate::reader::{
    decode_still_image, CodeDecoder, FrameSource, LiveScanner, ScanHandle, ScannerConfig,
};
use crate::route::{Completion, CompletionConfirmer, RouteLedger, Stop, StopId};
use crate::weigh::{WeighRequest, WeighedCollection, WeighedCollectionRecorder};

use super::builder::CollectionServiceBuilder;
use super::error::ServiceError;

/// Outcome of resolving a scanned (or uploaded) payload.
///
/// Every variant is a terminal, user-facing notice: duplicates and
/// unrecognized codes are outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResolution {
    /// The payload identified a pending stop, which is now completed.
    Completed(Stop),
    /// The payload identified a stop that was already collected.
    AlreadyCollected(Stop),
    /// The identified stop has a confirmation in flight; nothing changed.
    InFlight,
    /// The payload identified no stop on today's route.
    Unrecognized {
        /// The decoded payload, for the operator's benefit.
        payload: String,
    },
}

/// Facade over the collection-validation workflow.
///
/// Owns the day's [`RouteLedger`] and the session's
/// [`WeighedCollectionRecorder`], and drives scan sessions against the
/// injected decoder. Construct via [`CollectionService::builder`].
pub struct CollectionService<C: CompletionConfirmer> {
    ledger: RouteLedger<C>,
    recorder: WeighedCollectionRecorder,
    decoder: Arc<dyn CodeDecoder>,
    scanner: ScannerConfig,
}

impl<C: CompletionConfirmer> CollectionService<C> {
    /// Start building a service around a confirmer and a decoder.
    pub fn builder(confirmer: C, decoder: Arc<dyn CodeDecoder>) -> CollectionServiceBuilder<C> {
        CollectionServiceBuilder::new(confirmer, decoder)
    }

    pub(super) fn new(
        ledger: RouteLedger<C>,
        recorder: WeighedCollectionRecorder,
        decoder: Arc<dyn CodeDecoder>,
        scanner: ScannerConfig,
    ) -> Self {
        Self {
            ledger,
            recorder,
            decoder,
            scanner,
        }
    }

    /// Start a live scan session over the given camera.
    ///
    /// Refuses with [`ServiceError::ScanningUnavailable`] when the decoder
    /// reports itself unusable, so the caller can fall back to manual
    /// completion instead of hanging on a dead decode loop.
    pub fn start_live_scan<S: FrameSource + 'static>(
        &self,
        source: S,
    ) -> Result<ScanHandle, ServiceError> {
        if !self.decoder.ready() {
            warn!(decoder = self.decoder.name(), "Scanning disabled: decoder unavailable");
            return Err(ServiceError::ScanningUnavailable(
                self.decoder.name().to_string(),
            ));
        }
        Ok(LiveScanner::new(source, Arc::clone(&self.decoder), self.scanner.clone()).start())
    }

    /// Resolve a decoded payload against today's route.
    ///
    /// Control flow: matcher resolves the payload to a stop, the ledger
    /// applies the completion transition (scan-certified), the notifier is
    /// informed. Duplicates and unknown codes resolve to their respective
    /// [`ScanResolution`] variants without touching the ledger.
    pub async fn resolve_payload(&self, payload: &str) -> Result<ScanResolution, ServiceError> {
        match matcher::resolve_payload(payload, &self.ledger.stops()) {
            MatchResolution::Matched(id) | MatchResolution::AlreadyCollected(id) => {
                // The ledger re-checks state itself; a duplicate surfaces
                // as AlreadyCompleted with no second notification.
                match self.ledger.complete(id, true).await? {
                    Completion::Confirmed(stop) => Ok(ScanResolution::Completed(stop)),
                    Completion::AlreadyCompleted(stop) => {
                        info!(stop = stop.id, "Code matched an already collected stop");
                        Ok(ScanResolution::AlreadyCollected(stop))
                    }
                    Completion::InFlight => Ok(ScanResolution::InFlight),
                }
            }
            MatchResolution::Unrecognized => {
                warn!(payload, "Unrecognized code payload");
                Ok(ScanResolution::Unrecognized {
                    payload: payload.to_string(),
                })
            }
        }
    }

    /// Decode an uploaded still image and resolve its payload.
    pub async fn scan_still_image(&self, bytes: &[u8]) -> Result<ScanResolution, ServiceError> {
        let payload = decode_still_image(self.decoder.as_ref(), bytes)?;
        self.resolve_payload(&payload).await
    }

    /// Complete a stop through the manual path.
    ///
    /// Same ledger transition as the scan path, with the manual message
    /// text; available even when scanning is unavailable.
    pub async fn complete_manual(&self, stop_id: StopId) -> Result<Completion, ServiceError> {
        Ok(self.ledger.complete(stop_id, false).await?)
    }

    /// Record one weighed, pay-by-weight collection.
    pub fn record_weighed(&self, request: &WeighRequest) -> Result<WeighedCollection, ServiceError> {
        Ok(self.recorder.submit(request)?)
    }

    /// Snapshot of the whole route, in route order.
    pub fn route(&self) -> Vec<Stop> {
        self.ledger.stops()
    }

    /// Snapshot of the stops still pending, in route order.
    pub fn pending(&self) -> Vec<Stop> {
        self.ledger.pending()
    }

    /// Snapshot of the completed stops, in route order.
    pub fn completed(&self) -> Vec<Stop> {
        self.ledger.completed()
    }

    /// Look up one stop by id.
    pub fn stop(&self, stop_id: StopId) -> Option<Stop> {
        self.ledger.stop(stop_id)
    }

    /// Snapshot of the weighed-collection history, most recent first.
    pub fn weighed_records(&self) -> Vec<WeighedCollection> {
        self.recorder.records()
    }
}
