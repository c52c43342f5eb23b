//! Reader capability traits and frame type.

use std::future::Future;

use thiserror::Error;

/// Errors that can occur while reading or decoding codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderError {
    /// The user denied the camera permission prompt.
    #[error("Camera permission denied")]
    PermissionDenied,

    /// The camera device failed.
    #[error("Camera device error: {0}")]
    Device(String),

    /// The decode library is not usable; scanning should be disabled.
    #[error("Code decoder '{0}' is unavailable")]
    DecoderUnavailable(String),

    /// The supplied still image could not be read.
    #[error("Image data could not be read: {0}")]
    InvalidImage(String),

    /// The supplied still image holds no readable code.
    #[error("No code found in image")]
    NoCodeFound,
}

/// One grayscale raster frame sampled from a camera or a still image.
///
/// The luma buffer holds `width * height` 8-bit samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    luma: Vec<u8>,
}

impl Frame {
    /// Create a frame from raw luma samples.
    pub fn new(width: u32, height: u32, luma: Vec<u8>) -> Self {
        debug_assert_eq!(luma.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            luma,
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw luma samples, row-major.
    pub fn luma(&self) -> &[u8] {
        &self.luma
    }
}

/// Trait for camera frame sources.
///
/// The camera is an exclusive hardware resource with single-owner
/// acquisition: `open` acquires it (which may involve a user permission
/// prompt), `release` gives it back. Scan sessions guarantee that `release`
/// runs on every exit path, so implementations only need to make it
/// idempotent.
pub trait FrameSource: Send {
    /// Requests device access and begins streaming.
    ///
    /// A denied permission prompt maps to [`ReaderError::PermissionDenied`],
    /// a hardware fault to [`ReaderError::Device`].
    fn open(&mut self) -> impl Future<Output = Result<(), ReaderError>> + Send;

    /// Produces the current frame.
    fn next_frame(&mut self) -> impl Future<Output = Result<Frame, ReaderError>> + Send;

    /// Whether the device reports a torch/illumination capability.
    fn supports_illumination(&self) -> bool {
        false
    }

    /// Best-effort torch control; returns whether the request was applied.
    ///
    /// Unsupported devices return `false`. This is never an error.
    fn set_illumination(&mut self, on: bool) -> bool {
        let _ = on;
        false
    }

    /// Releases the device. Idempotent; safe to call when not streaming.
    fn release(&mut self);
}

/// Trait for code decode routines.
///
/// Implementations wrap a decoding library and extract a text payload from
/// a frame's pixel buffer. The payload is arbitrary UTF-8 text; this crate
/// imposes no schema on it.
pub trait CodeDecoder: Send + Sync {
    /// Attempts to decode a payload from the frame.
    ///
    /// Returns `None` when the frame holds no readable code; the scan loop
    /// then moves on to the next frame.
    fn decode(&self, frame: &Frame) -> Option<String>;

    /// Whether the underlying decode library is usable.
    ///
    /// Callers check this before starting a session so scanning can be
    /// disabled instead of hanging on a decoder that never resolves.
    fn ready(&self) -> bool {
        true
    }

    /// Returns the decoder's name for logging and identification.
    fn name(&self) -> &str;
}
