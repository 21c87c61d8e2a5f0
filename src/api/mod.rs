//! Client for the recording service
//!
//! The service exposes a single `recording` resource:
//! - POST /api/recordings - Submit audio, receive the transcribed record
//! - GET /api/recordings - List every recording
//! - GET /api/recordings/:id - Fetch one recording
//! - DELETE /api/recordings/:id - Delete a recording

mod client;
mod error;
mod models;

pub use client::{HttpRecordingClient, RecordingApi};
pub use error::ApiError;
pub use models::{parse_timestamp, Recording, RecordingCreateRequest, SearchQuery, SearchResult};
