//! Camera page: recording state machine over a pluggable capture service.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeDelta};

/// File name used when no output is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "output.mov";

/// `<temp dir>/output.mov`
pub fn default_destination() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_OUTPUT_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No capture device is available
    NoDevice,
    /// A recording is already in progress
    AlreadyRecording,
    /// The device reported a failure
    Failed(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoDevice => write!(f, "No camera device available"),
            CaptureError::AlreadyRecording => write!(f, "Recording already in progress"),
            CaptureError::Failed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Completion notification delivered by a capture service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingFinished {
    pub location: PathBuf,
    pub error: Option<CaptureError>,
}

/// Platform video capture, consumed by [`CameraPage`].
pub trait CaptureService {
    fn start_recording(&mut self, destination: &Path) -> Result<(), CaptureError>;

    fn stop_recording(&mut self);

    /// Next pending completion notification, if any.
    fn poll_finished(&mut self) -> Option<RecordingFinished>;
}

impl<S: CaptureService + ?Sized> CaptureService for Box<S> {
    fn start_recording(&mut self, destination: &Path) -> Result<(), CaptureError> {
        (**self).start_recording(destination)
    }

    fn stop_recording(&mut self) {
        (**self).stop_recording();
    }

    fn poll_finished(&mut self) -> Option<RecordingFinished> {
        (**self).poll_finished()
    }
}

/// Capture service for hosts without a camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCapture;

impl CaptureService for UnavailableCapture {
    fn start_recording(&mut self, _destination: &Path) -> Result<(), CaptureError> {
        Err(CaptureError::NoDevice)
    }

    fn stop_recording(&mut self) {}

    fn poll_finished(&mut self) -> Option<RecordingFinished> {
        None
    }
}

/// Recording state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording {
        started_at: DateTime<Local>,
        destination: PathBuf,
    },
}

impl RecordingState {
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    pub fn destination(&self) -> Option<&Path> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { destination, .. } => Some(destination),
        }
    }

    /// Time spent recording as of `now`; zero when idle.
    pub fn elapsed(&self, now: DateTime<Local>) -> TimeDelta {
        match self {
            RecordingState::Idle => TimeDelta::zero(),
            RecordingState::Recording { started_at, .. } => now - *started_at,
        }
    }
}

pub struct CameraPage<S> {
    service: S,
    destination: PathBuf,
    state: RecordingState,
    status: Option<String>,
    last_finished: Option<RecordingFinished>,
}

impl<S: CaptureService> CameraPage<S> {
    pub fn new(service: S, destination: impl Into<PathBuf>) -> Self {
        Self {
            service,
            destination: destination.into(),
            state: RecordingState::Idle,
            status: None,
            last_finished: None,
        }
    }

    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Latest status line for display.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn last_finished(&self) -> Option<&RecordingFinished> {
        self.last_finished.as_ref()
    }

    /// Start when idle, stop when recording.
    pub fn toggle_recording(&mut self) {
        match self.state {
            RecordingState::Idle => self.start(),
            RecordingState::Recording { .. } => self.stop(),
        }
    }

    fn start(&mut self) {
        match self.service.start_recording(&self.destination) {
            Ok(()) => {
                tracing::info!(destination = %self.destination.display(), "recording started");
                self.status = Some(format!("Recording to {}", self.destination.display()));
                self.state = RecordingState::Recording {
                    started_at: Local::now(),
                    destination: self.destination.clone(),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "recording could not start");
                self.status = Some(format!("Could not start recording: {}", e));
            }
        }
    }

    fn stop(&mut self) {
        self.service.stop_recording();
        self.state = RecordingState::Idle;
        self.status = Some("Stopping recording…".to_string());
        tracing::info!("recording stop requested");
    }

    /// Drain completion notifications from the service. Returns whether
    /// anything arrived.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(finished) = self.service.poll_finished() {
            self.status = Some(match &finished.error {
                None => format!("Recording finished: {}", finished.location.display()),
                Some(e) => format!("Recording failed: {}", e),
            });
            match &finished.error {
                None => {
                    tracing::info!(location = %finished.location.display(), "recording finished")
                }
                Some(e) => tracing::error!(error = %e, "recording failed"),
            }
            // A finished recording means the device is idle again.
            self.state = RecordingState::Idle;
            self.last_finished = Some(finished);
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_capture_keeps_page_idle() {
        let mut page = CameraPage::new(UnavailableCapture, default_destination());
        page.toggle_recording();

        assert_eq!(page.state(), &RecordingState::Idle);
        assert_eq!(
            page.status(),
            Some("Could not start recording: No camera device available")
        );
        assert!(!page.poll());
    }

    #[test]
    fn default_destination_is_in_temp_dir() {
        let dest = default_destination();
        assert_eq!(dest.file_name().and_then(|n| n.to_str()), Some("output.mov"));
        assert!(dest.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn idle_state_has_no_elapsed_time() {
        assert_eq!(RecordingState::Idle.elapsed(Local::now()), TimeDelta::zero());
    }
}
