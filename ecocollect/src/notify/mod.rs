//! Notification dispatch abstraction.
//!
//! This module provides the message-dispatch interface the workflow invokes
//! on state changes (stop completed, payment due), decoupled from any
//! delivery mechanism. Dispatch is fire-and-forget: the workflow never
//! awaits or inspects a result.
//!
//! # Architecture
//!
//! - `Notifier` trait: the interface components use to dispatch messages
//! - `TracingNotifier`: production adapter that delegates to the `tracing` crate
//! - `NoOpNotifier`: silent notifier for testing and benchmarking
//! - `RecordingNotifier`: captures dispatched messages for assertions
//!
//! # Usage
//!
//! Components that dispatch notifications accept an `Arc<dyn Notifier>`:
//!
//! ```
//! use ecocollect::notify::{Audience, NoOpNotifier, Notifier, Severity};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     notifier: Arc<dyn Notifier>,
//! }
//!
//! impl MyComponent {
//!     fn finish_work(&self) {
//!         self.notifier.notify(
//!             Audience::Admin,
//!             "Work finished",
//!             "All pending items processed.",
//!             Severity::Info,
//!         );
//!     }
//! }
//!
//! let component = MyComponent { notifier: Arc::new(NoOpNotifier) };
//! component.finish_work();
//! ```

mod noop;
mod recording;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpNotifier;
pub use r#trait::{Audience, Notification, Notifier, Severity};
pub use recording::RecordingNotifier;
pub use tracing_adapter::TracingNotifier;
