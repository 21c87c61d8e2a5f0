use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use super::error::ApiError;
use super::models::{Recording, RecordingCreateRequest};
use crate::config::ApiConfig;

const RECORDINGS_PATH: &str = "/api/recordings";

/// Operations the client core needs from the recording service
#[async_trait]
pub trait RecordingApi: Send + Sync {
    /// Submit a new recording and receive the stored record
    async fn create_recording(&self, request: &RecordingCreateRequest)
        -> Result<Recording, ApiError>;

    /// Fetch the whole collection, in service order
    async fn list_recordings(&self) -> Result<Vec<Recording>, ApiError>;

    async fn get_recording(&self, id: &str) -> Result<Recording, ApiError>;

    async fn delete_recording(&self, id: &str) -> Result<(), ApiError>;
}

/// JSON-over-HTTP client for the recording service
#[derive(Debug, Clone)]
pub struct HttpRecordingClient {
    client: Client,
    base_url: String,
}

impl HttpRecordingClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Recording service client targeting {}", base_url);

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, RECORDINGS_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, RECORDINGS_PATH, id)
    }

    /// Reject non-success responses, keeping the body for diagnostics
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = Self::check(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RecordingApi for HttpRecordingClient {
    async fn create_recording(
        &self,
        request: &RecordingCreateRequest,
    ) -> Result<Recording, ApiError> {
        debug!(
            "POST {} ({} bytes of audio, coordinates={})",
            RECORDINGS_PATH,
            request.audio_data.len(),
            request.latitude.is_some() && request.longitude.is_some()
        );

        let response = self
            .client
            .post(self.collection_url())
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn list_recordings(&self) -> Result<Vec<Recording>, ApiError> {
        debug!("GET {}", RECORDINGS_PATH);

        let response = self.client.get(self.collection_url()).send().await?;
        Self::decode(response).await
    }

    async fn get_recording(&self, id: &str) -> Result<Recording, ApiError> {
        debug!("GET {}/{}", RECORDINGS_PATH, id);

        let response = self.client.get(self.item_url(id)).send().await?;
        Self::decode(response).await
    }

    async fn delete_recording(&self, id: &str) -> Result<(), ApiError> {
        debug!("DELETE {}/{}", RECORDINGS_PATH, id);

        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
