//! Builder for the collection service.

use std::sync::Arc;

use crate::notify::{NoOpNotifier, Notifier};
use crate::reader::{CodeDecoder, ScannerConfig};
use crate::route::{CompletionConfirmer, RouteLedger, Stop};
use crate::weigh::WeighedCollectionRecorder;

use super::facade::CollectionService;

/// Builder assembling a [`CollectionService`] from its collaborators.
///
/// The confirmer and decoder are required up front; the route defaults to
/// empty, the notifier to [`NoOpNotifier`], and the scanner configuration
/// to its defaults.
///
/// # Example
///
/// ```ignore
/// let service = CollectionService::builder(confirmer, decoder)
///     .route(todays_stops)
///     .notifier(Arc::new(TracingNotifier))
///     .scanner_config(ScannerConfig { frame_interval: Duration::from_millis(50) })
///     .build();
/// ```
pub struct CollectionServiceBuilder<C: CompletionConfirmer> {
    confirmer: C,
    decoder: Arc<dyn CodeDecoder>,
    route: Vec<Stop>,
    notifier: Arc<dyn Notifier>,
    scanner: ScannerConfig,
}

impl<C: CompletionConfirmer> CollectionServiceBuilder<C> {
    pub(super) fn new(confirmer: C, decoder: Arc<dyn CodeDecoder>) -> Self {
        Self {
            confirmer,
            decoder,
            route: Vec::new(),
            notifier: Arc::new(NoOpNotifier),
            scanner: ScannerConfig::default(),
        }
    }

    /// Seed the day's route. Stop ids must be unique.
    pub fn route(mut self, route: Vec<Stop>) -> Self {
        self.route = route;
        self
    }

    /// Set the notification dispatch target.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Override the live-scan configuration.
    pub fn scanner_config(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }

    /// Assemble the service.
    pub fn build(self) -> CollectionService<C> {
        let ledger = RouteLedger::new(self.route, self.confirmer, Arc::clone(&self.notifier));
        let recorder = WeighedCollectionRecorder::new(self.notifier);
        CollectionService::new(ledger, recorder, self.decoder, self.scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::scripted::TextPayloadDecoder;
    use crate::route::SimulatedConfirmer;

    #[test]
    fn test_defaults_are_empty_route_and_silent_notifier() {
        let service =
            CollectionService::builder(SimulatedConfirmer::default(), Arc::new(TextPayloadDecoder))
                .build();

        assert!(service.route().is_empty());
        assert!(service.pending().is_empty());
        assert!(service.weighed_records().is_empty());
    }

    #[test]
    fn test_route_is_seeded_in_order() {
        let service =
            CollectionService::builder(SimulatedConfirmer::default(), Arc::new(TextPayloadDecoder))
                .route(vec![
                    Stop::new(5, "A", "addr", "Organic", "08:00"),
                    Stop::new(2, "B", "addr", "Glass", "09:00"),
                ])
                .build();

        let ids: Vec<_> = service.route().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }
}
