use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored voice memo, as returned by the recording service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Server-assigned identifier, unique within the collection
    pub id: String,

    /// Transcription (may be a placeholder)
    pub text: String,

    /// When the memo was made
    #[serde(deserialize_with = "lenient_datetime")]
    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// City derived server-side from the coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// When the service received the memo
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Recording {
    /// Both coordinates, when the service stored them
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Body of POST /api/recordings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingCreateRequest {
    /// Base64-encoded audio clip
    pub audio_data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// A free-text memory search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,

    /// Keep at most this many results after ranking
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Blank queries never trigger a search
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// A recording matched by a search, with its volatile relevance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub similarity: f64,
}

impl SearchResult {
    pub fn from_recording(recording: &Recording, similarity: f64) -> Self {
        Self {
            id: recording.id.clone(),
            text: recording.text.clone(),
            timestamp: recording.timestamp,
            latitude: recording.latitude,
            longitude: recording.longitude,
            city: recording.city.clone(),
            similarity,
        }
    }
}

/// Parse an RFC 3339 timestamp, or a zone-less ISO-8601 one taken as UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.and_utc()))
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
