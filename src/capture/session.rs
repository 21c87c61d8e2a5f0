use serde::Serialize;

use super::geo::GeoPoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapturePhase {
    /// No timer active, a new session may start
    #[default]
    Idle,
    /// Timer running
    Recording,
    /// Waiting for the recording service to answer
    Processing,
}

/// Outcome of the last submitted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum CaptureResult {
    /// Text returned by the service
    Transcription(String),
    /// Localized failure message
    Failed(String),
}

impl CaptureResult {
    pub fn text(&self) -> &str {
        match self {
            CaptureResult::Transcription(text) | CaptureResult::Failed(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CaptureResult::Failed(_))
    }
}

/// Transient client-side state of one start-to-result attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaptureSession {
    pub phase: CapturePhase,
    pub elapsed_secs: u64,
    /// Percentage, never above the configured maximum
    pub progress: u8,
    pub location: Option<GeoPoint>,
    /// The position lookup ended without a point
    pub location_unavailable: bool,
    pub result: Option<CaptureResult>,
}

impl CaptureSession {
    pub fn is_recording(&self) -> bool {
        self.phase == CapturePhase::Recording
    }

    pub fn is_processing(&self) -> bool {
        self.phase == CapturePhase::Processing
    }

    /// Enter Recording from Idle, clearing what the previous session left.
    /// Returns false when a session is already running or submitting.
    pub fn begin(&mut self) -> bool {
        if self.phase != CapturePhase::Idle {
            return false;
        }

        self.phase = CapturePhase::Recording;
        self.elapsed_secs = 0;
        self.progress = 0;
        self.result = None;
        true
    }

    /// One timer tick. Ignored outside Recording.
    pub fn tick(&mut self, max_progress: u8) {
        if self.phase != CapturePhase::Recording {
            return;
        }

        self.elapsed_secs += 1;
        self.progress = self.progress.saturating_add(1).min(max_progress);
    }

    /// Enter Processing from Recording. Returns false if nothing was recording.
    pub fn finish(&mut self) -> bool {
        if self.phase != CapturePhase::Recording {
            return false;
        }

        self.phase = CapturePhase::Processing;
        true
    }

    /// Settle the submission and return to Idle
    pub fn settle(&mut self, result: CaptureResult) {
        self.phase = CapturePhase::Idle;
        self.result = Some(result);
    }
}
