//! Deterministic reader implementations.
//!
//! These run the scan workflow without a camera or a decode library:
//! [`ScriptedFrameSource`] plays back a fixed sequence of frames, and
//! [`TextPayloadDecoder`] reads frames whose luma buffer is UTF-8 text (as
//! produced by [`text_frame`]). Tests and the CLI demo session are built on
//! them; production wires real device and decoder implementations into the
//! same traits.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::types::{CodeDecoder, Frame, FrameSource, ReaderError};

/// Build a frame whose luma buffer spells out a payload.
///
/// [`TextPayloadDecoder`] decodes it back; every other decoder sees noise.
pub fn text_frame(payload: &str) -> Frame {
    Frame::new(payload.len() as u32, 1, payload.as_bytes().to_vec())
}

/// Build a frame that no decoder can read.
pub fn blank_frame() -> Frame {
    Frame::new(8, 8, vec![0; 64])
}

/// Frame source that plays back a scripted frame sequence.
///
/// Once the script is exhausted the source keeps streaming blank frames,
/// like a camera pointed at nothing - unless a device failure was scripted
/// with [`with_device_failure`](Self::with_device_failure).
///
/// The release flag is shared so tests can assert that a scan session gave
/// the device back on its exit path.
pub struct ScriptedFrameSource {
    frames: VecDeque<Frame>,
    deny_permission: bool,
    exhausted_failure: Option<String>,
    supports_illumination: bool,
    illuminated: Arc<AtomicBool>,
    released: Arc<AtomicBool>,
}

impl ScriptedFrameSource {
    /// Create a source that plays the given frames in order.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
            deny_permission: false,
            exhausted_failure: None,
            supports_illumination: false,
            illuminated: Arc::new(AtomicBool::new(false)),
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Script a denied permission prompt on `open`.
    pub fn with_permission_denied(mut self) -> Self {
        self.deny_permission = true;
        self
    }

    /// Script a device failure once the frame sequence is exhausted.
    pub fn with_device_failure(mut self, message: impl Into<String>) -> Self {
        self.exhausted_failure = Some(message.into());
        self
    }

    /// Report a torch capability on this device.
    pub fn with_illumination(mut self) -> Self {
        self.supports_illumination = true;
        self
    }

    /// Shared flag observing `release` calls.
    pub fn release_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.released)
    }

    /// Shared flag observing the torch state.
    pub fn illumination_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.illuminated)
    }
}

impl FrameSource for ScriptedFrameSource {
    fn open(&mut self) -> impl Future<Output = Result<(), ReaderError>> + Send {
        let denied = self.deny_permission;
        async move {
            if denied {
                Err(ReaderError::PermissionDenied)
            } else {
                Ok(())
            }
        }
    }

    fn next_frame(&mut self) -> impl Future<Output = Result<Frame, ReaderError>> + Send {
        let next = match self.frames.pop_front() {
            Some(frame) => Ok(frame),
            None => match &self.exhausted_failure {
                Some(message) => Err(ReaderError::Device(message.clone())),
                None => Ok(blank_frame()),
            },
        };
        async move { next }
    }

    fn supports_illumination(&self) -> bool {
        self.supports_illumination
    }

    fn set_illumination(&mut self, on: bool) -> bool {
        if !self.supports_illumination {
            return false;
        }
        self.illuminated.store(on, Ordering::SeqCst);
        true
    }

    fn release(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Decoder that reads frames produced by [`text_frame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPayloadDecoder;

impl CodeDecoder for TextPayloadDecoder {
    fn decode(&self, frame: &Frame) -> Option<String> {
        // A payload frame is a single text row; anything else is noise.
        if frame.height() != 1 || frame.luma().is_empty() {
            return None;
        }
        String::from_utf8(frame.luma().to_vec()).ok()
    }

    fn name(&self) -> &str {
        "text-payload"
    }
}

/// Decoder whose library failed to load; `ready` reports false.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDecoder;

impl CodeDecoder for UnavailableDecoder {
    fn decode(&self, _frame: &Frame) -> Option<String> {
        None
    }

    fn ready(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
