use anyhow::{Context, Result};
use base64::Engine;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::audio::AudioSource;
use super::geo::{GeoError, GeoLocator};
use super::session::{CaptureResult, CaptureSession};
use super::ticker::Ticker;
use crate::api::{Recording, RecordingApi, RecordingCreateRequest};
use crate::config::CaptureConfig;
use crate::i18n::Messages;

/// Coordinates a timed capture session and its submission
///
/// State moves Idle → Recording → Processing → Idle. Observers follow it
/// through [`CaptureFlow::subscribe`]. Dropping the flow tears down the
/// ticker and any pending location lookup.
pub struct CaptureFlow {
    api: Arc<dyn RecordingApi>,
    audio: Arc<dyn AudioSource>,
    config: CaptureConfig,
    messages: &'static Messages,
    state: Arc<watch::Sender<CaptureSession>>,
    ticker: Option<Ticker>,
    locate_task: Option<JoinHandle<()>>,
}

impl CaptureFlow {
    pub fn new(
        api: Arc<dyn RecordingApi>,
        audio: Arc<dyn AudioSource>,
        config: CaptureConfig,
        messages: &'static Messages,
    ) -> Self {
        let (state, _) = watch::channel(CaptureSession::default());

        Self {
            api,
            audio,
            config,
            messages,
            state: Arc::new(state),
            ticker: None,
            locate_task: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CaptureSession> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CaptureSession {
        self.state.borrow().clone()
    }

    /// Look up the device position once, in the background
    ///
    /// Failure or timeout is logged and leaves the session without
    /// coordinates. Later calls are ignored.
    pub fn activate(&mut self, locator: Arc<dyn GeoLocator>) {
        if self.locate_task.is_some() {
            return;
        }

        let state = Arc::clone(&self.state);
        let timeout = self.config.geolocation_timeout();

        self.locate_task = Some(tokio::spawn(async move {
            let located = tokio::time::timeout(timeout, locator.locate())
                .await
                .unwrap_or(Err(GeoError::Timeout(timeout)));

            match located {
                Ok(point) => {
                    info!(
                        "Location acquired: {:.4}, {:.4}",
                        point.latitude, point.longitude
                    );
                    state.send_modify(|s| s.location = Some(point));
                }
                Err(e) => {
                    warn!("Location lookup failed: {}", e);
                    state.send_modify(|s| s.location_unavailable = true);
                }
            }
        }));
    }

    /// Begin a new session. Returns false while one is recording or submitting.
    pub fn start(&mut self) -> bool {
        if !self.state.send_if_modified(CaptureSession::begin) {
            warn!("Capture session already active");
            return false;
        }

        let state = Arc::clone(&self.state);
        let max_progress = self.config.max_progress;
        self.ticker = Some(Ticker::spawn(self.config.tick_interval(), move || {
            state.send_modify(|s| s.tick(max_progress));
        }));

        info!("Capture session started");
        true
    }

    /// Finish the running session and submit it
    ///
    /// Returns `None` without touching the network when nothing was recording.
    /// Otherwise exactly one create request is issued after the ticker has
    /// ended, and the settled result is returned.
    pub async fn stop(&mut self) -> Option<CaptureResult> {
        if !self.state.send_if_modified(CaptureSession::finish) {
            debug!("Stop ignored, no session recording");
            return None;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.cancel().await;
        }

        let session = self.snapshot();
        info!(
            "Capture session stopped after {}s, submitting",
            session.elapsed_secs
        );

        let result = match self.submit(&session).await {
            Ok(recording) => {
                info!("Recording {} stored", recording.id);
                CaptureResult::Transcription(recording.text)
            }
            Err(e) => {
                error!("Failed to submit recording: {:#}", e);
                CaptureResult::Failed(self.messages.capture_failed.to_string())
            }
        };

        self.state.send_modify(|s| s.settle(result.clone()));
        Some(result)
    }

    async fn submit(&self, session: &CaptureSession) -> Result<Recording> {
        let clip = self
            .audio
            .clip(Duration::from_secs(session.elapsed_secs))
            .await
            .with_context(|| format!("Audio source {} failed", self.audio.name()))?;

        let request = RecordingCreateRequest {
            audio_data: base64::engine::general_purpose::STANDARD.encode(clip),
            timestamp: Some(Utc::now()),
            latitude: session.location.map(|p| p.latitude),
            longitude: session.location.map(|p| p.longitude),
            city: None,
        };

        let recording = self
            .api
            .create_recording(&request)
            .await
            .context("Create request failed")?;

        Ok(recording)
    }
}

impl Drop for CaptureFlow {
    fn drop(&mut self) {
        if let Some(task) = self.locate_task.take() {
            task.abort();
        }
        if self.ticker.take().is_some() {
            debug!("Capture flow dropped while recording, ticker torn down");
        }
    }
}
