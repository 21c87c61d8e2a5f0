// Shared fixtures for integration tests
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use memobread::api::{ApiError, Recording, RecordingApi, RecordingCreateRequest};
use memobread::config::ApiConfig;
use memobread::server::{self, AppState};
use memobread::HttpRecordingClient;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::net::TcpListener;

pub fn recording(id: &str, text: &str, city: Option<&str>) -> Recording {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    Recording {
        id: id.to_string(),
        text: text.to_string(),
        timestamp,
        latitude: None,
        longitude: None,
        city: city.map(str::to_string),
        created_at: timestamp,
    }
}

/// In-memory recording service that counts calls
#[derive(Default)]
pub struct MockApi {
    pub recordings: Vec<Recording>,
    pub fail: bool,
    /// Delay applied to every call
    pub delay: Option<Duration>,
    pub creates: AtomicUsize,
    pub lists: AtomicUsize,
    pub last_request: Mutex<Option<RecordingCreateRequest>>,
}

impl MockApi {
    pub fn with_recordings(recordings: Vec<Recording>) -> Self {
        Self {
            recordings,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordingCreateRequest> {
        self.last_request.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "internal error".to_string(),
        }
    }
}

#[async_trait]
impl RecordingApi for MockApi {
    async fn create_recording(
        &self,
        request: &RecordingCreateRequest,
    ) -> Result<Recording, ApiError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.pause().await;

        if self.fail {
            return Err(Self::server_error());
        }

        let mut stored = recording("new", "transcribed memo", None);
        stored.latitude = request.latitude;
        stored.longitude = request.longitude;
        Ok(stored)
    }

    async fn list_recordings(&self) -> Result<Vec<Recording>, ApiError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.pause().await;

        if self.fail {
            return Err(Self::server_error());
        }
        Ok(self.recordings.clone())
    }

    async fn get_recording(&self, id: &str) -> Result<Recording, ApiError> {
        self.recordings
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: String::new(),
            })
    }

    async fn delete_recording(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Start the stub service on an ephemeral port
pub async fn spawn_stub() -> Result<(String, AppState)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let state = AppState::new("未知位置");

    tokio::spawn(server::serve(listener, state.clone()));

    Ok((base_url, state))
}

pub fn http_client(base_url: &str) -> Result<HttpRecordingClient> {
    Ok(HttpRecordingClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })?)
}
