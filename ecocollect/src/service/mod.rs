//! High-level facade for the collection-validation workflow.
//!
//! This module wires the reader, matcher, ledger, and recorder together
//! behind one API, following the Facade pattern.
//!
//! # Example
//!
//! ```ignore
//! use ecocollect::notify::TracingNotifier;
//! use ecocollect::route::SimulatedConfirmer;
//! use ecocollect::service::{CollectionService, ScanResolution};
//! use std::sync::Arc;
//!
//! let service = CollectionService::builder(SimulatedConfirmer::default(), decoder)
//!     .route(todays_stops)
//!     .notifier(Arc::new(TracingNotifier))
//!     .build();
//!
//! // Scan path
//! let mut handle = service.start_live_scan(camera)?;
//! if let ScanOutcome::Decoded(payload) = handle.wait().await {
//!     match service.resolve_payload(&payload).await? {
//!         ScanResolution::Completed(stop) => println!("{} collected", stop.name),
//!         other => println!("{other:?}"),
//!     }
//! }
//!
//! // Manual fallback path
//! service.complete_manual(3).await?;
//! ```

mod builder;
mod error;
mod facade;

pub use builder::CollectionServiceBuilder;
pub use error::ServiceError;
pub use facade::{CollectionService, ScanResolution};
