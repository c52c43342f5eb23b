//! Live scan session over a camera frame source.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::types::{CodeDecoder, FrameSource, ReaderError};

/// Default pacing of the decode loop (roughly one display frame).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

/// Configuration for live scan sessions.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Interval between decode attempts.
    pub frame_interval: Duration,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
        }
    }
}

/// Terminal outcome of one scan session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A payload was decoded; the session stopped itself.
    Decoded(String),
    /// The session was cancelled before anything was decoded.
    Cancelled,
    /// The session failed (permission denied, device fault).
    Failed(ReaderError),
}

impl ScanOutcome {
    /// Returns true if a payload was decoded.
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }
}

/// Control message forwarded into a running session.
enum ScanCommand {
    ToggleIllumination,
}

/// Handle to a running scan session.
///
/// Dropping the handle cancels the session; the spawned task releases the
/// camera on its way out, so teardown (navigating away, dropping the view)
/// never leaks the device.
pub struct ScanHandle {
    cancel: CancellationToken,
    control_tx: mpsc::Sender<ScanCommand>,
    outcome_rx: Option<oneshot::Receiver<ScanOutcome>>,
    task: Option<JoinHandle<()>>,
}

impl ScanHandle {
    /// Cancel the session. Idempotent; safe to call when not scanning.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Returns true once the session has been asked to stop.
    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Request a torch toggle on the active camera.
    ///
    /// Best-effort: devices without the capability ignore the request.
    pub fn toggle_illumination(&self) {
        let _ = self.control_tx.try_send(ScanCommand::ToggleIllumination);
    }

    /// Wait for the session's terminal outcome.
    ///
    /// Returns once the camera has been released. A second call (or a call
    /// after the session was torn down) reports [`ScanOutcome::Cancelled`].
    pub async fn wait(&mut self) -> ScanOutcome {
        let outcome = match self.outcome_rx.take() {
            Some(rx) => rx.await.unwrap_or(ScanOutcome::Cancelled),
            None => ScanOutcome::Cancelled,
        };
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        outcome
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for ScanHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanHandle")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

/// One live scan session: camera acquisition, paced decode loop,
/// at-most-once payload emission.
///
/// The session stops itself at the first successful decode; an unrecognized
/// result is the caller's concern, and retrying means starting a new
/// session.
pub struct LiveScanner<S: FrameSource + 'static> {
    source: S,
    decoder: Arc<dyn CodeDecoder>,
    config: ScannerConfig,
}

impl<S: FrameSource + 'static> LiveScanner<S> {
    /// Create a session over the given camera and decoder.
    pub fn new(source: S, decoder: Arc<dyn CodeDecoder>, config: ScannerConfig) -> Self {
        Self {
            source,
            decoder,
            config,
        }
    }

    /// Spawn the session and return its handle.
    pub fn start(self) -> ScanHandle {
        let cancel = CancellationToken::new();
        let (control_tx, control_rx) = mpsc::channel(8);
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let task = tokio::spawn(scan_loop(
            self.source,
            self.decoder,
            self.config,
            cancel.clone(),
            control_rx,
            outcome_tx,
        ));

        ScanHandle {
            cancel,
            control_tx,
            outcome_rx: Some(outcome_rx),
            task: Some(task),
        }
    }
}

async fn scan_loop<S: FrameSource>(
    mut source: S,
    decoder: Arc<dyn CodeDecoder>,
    config: ScannerConfig,
    cancel: CancellationToken,
    control_rx: mpsc::Receiver<ScanCommand>,
    outcome_tx: oneshot::Sender<ScanOutcome>,
) {
    debug!(decoder = decoder.name(), "Scan session starting");

    let outcome = run_session(&mut source, decoder.as_ref(), &config, &cancel, control_rx).await;

    // The camera is released on every exit path: decode, cancel, error.
    source.release();

    debug!(outcome = ?outcome, "Scan session ended");
    let _ = outcome_tx.send(outcome);
}

async fn run_session<S: FrameSource>(
    source: &mut S,
    decoder: &dyn CodeDecoder,
    config: &ScannerConfig,
    cancel: &CancellationToken,
    mut control_rx: mpsc::Receiver<ScanCommand>,
) -> ScanOutcome {
    // Acquisition awaits the user's permission prompt; a dismissal during
    // the prompt cancels the session before the device is streaming.
    tokio::select! {
        _ = cancel.cancelled() => return ScanOutcome::Cancelled,
        opened = source.open() => {
            if let Err(e) = opened {
                warn!(error = %e, "Camera acquisition failed");
                return ScanOutcome::Failed(e);
            }
        }
    }

    let mut illuminated = false;
    let mut ticker = tokio::time::interval(config.frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return ScanOutcome::Cancelled,
            Some(command) = control_rx.recv() => match command {
                ScanCommand::ToggleIllumination => {
                    if source.supports_illumination() {
                        illuminated = !illuminated;
                        let applied = source.set_illumination(illuminated);
                        trace!(on = illuminated, applied, "Illumination toggled");
                    } else {
                        trace!("Illumination unsupported on this device");
                    }
                }
            },
            _ = ticker.tick() => {
                let frame = match source.next_frame().await {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!(error = %e, "Frame capture failed");
                        return ScanOutcome::Failed(e);
                    }
                };
                if let Some(payload) = decoder.decode(&frame) {
                    debug!(decoder = decoder.name(), "Payload decoded");
                    return ScanOutcome::Decoded(payload);
                }
            }
        }
    }
}
