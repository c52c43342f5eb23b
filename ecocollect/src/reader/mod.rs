//! Code reader: camera frames in, decoded payloads out.
//!
//! This module turns a stream of camera frames (or one uploaded still
//! image) into a decoded code payload. Both the camera and the decode
//! routine are injected capabilities, so the workflow runs against real
//! hardware in production and against [`scripted`] implementations in tests
//! and demo sessions.
//!
//! # Capabilities
//!
//! - [`FrameSource`] - the camera: permission-gated acquisition, per-frame
//!   reads, best-effort torch control, idempotent release
//! - [`CodeDecoder`] - the decode routine over a [`Frame`]'s pixel buffer
//!
//! # Scan sessions
//!
//! [`LiveScanner`] runs one session: it opens the source, paces a per-frame
//! decode loop, and emits the first decoded payload exactly once before
//! stopping itself. The returned [`ScanHandle`] cancels the session on
//! [`stop`](ScanHandle::stop) or on drop, and the camera is released on
//! every exit path.
//!
//! # Example
//!
//! ```ignore
//! use ecocollect::reader::{LiveScanner, ScanOutcome, ScannerConfig};
//!
//! let scanner = LiveScanner::new(camera, decoder, ScannerConfig::default());
//! let mut handle = scanner.start();
//!
//! match handle.wait().await {
//!     ScanOutcome::Decoded(payload) => println!("decoded {payload}"),
//!     ScanOutcome::Cancelled => println!("scan dismissed"),
//!     ScanOutcome::Failed(e) => eprintln!("scan failed: {e}"),
//! }
//! ```

mod scanner;
pub mod scripted;
mod still;
mod types;

pub use scanner::{LiveScanner, ScanHandle, ScanOutcome, ScannerConfig, DEFAULT_FRAME_INTERVAL_MS};
pub use still::decode_still_image;
pub use types::{CodeDecoder, Frame, FrameSource, ReaderError};
