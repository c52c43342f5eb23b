//! EcoCollect - Collection validation for waste-pickup routes
//!
//! This library implements the workflow a field collector uses to confirm
//! that waste-pickup stops have been serviced: scanning a visual code that
//! identifies a stop, resolving the decoded payload against the day's route,
//! and applying the pending-to-completed transition, plus the parallel
//! pay-by-weight recording flow for ad-hoc pickups.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use ecocollect::notify::TracingNotifier;
//! use ecocollect::route::SimulatedConfirmer;
//! use ecocollect::service::CollectionService;
//! use std::sync::Arc;
//!
//! let service = CollectionService::builder(SimulatedConfirmer::default(), decoder)
//!     .route(todays_stops)
//!     .notifier(Arc::new(TracingNotifier))
//!     .build();
//!
//! // Resolve a scanned payload against the route
//! let resolution = service.resolve_payload("ECO-STOP-001").await?;
//! ```

pub mod config;
pub mod logging;
pub mod matcher;
pub mod notify;
pub mod reader;
pub mod route;
pub mod service;
pub mod weigh;

/// Version of the EcoCollect library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
