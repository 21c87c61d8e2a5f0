use super::geocode::nearest_city;
use super::speech::transcribe;
use super::state::AppState;
use crate::api::{Recording, RecordingCreateRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Recording not found".to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/recordings
/// Transcribe the clip, resolve the city and store the recording
pub async fn create_recording(
    State(state): State<AppState>,
    Json(req): Json<RecordingCreateRequest>,
) -> impl IntoResponse {
    let now = Utc::now();
    let text = transcribe(&req.audio_data);

    // A zero latitude or longitude counts as no fix
    let city = match (req.latitude, req.longitude) {
        (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0 => {
            Some(nearest_city(latitude, longitude).unwrap_or(state.unknown_city).to_string())
        }
        _ => req.city,
    };

    let recording = Recording {
        id: uuid::Uuid::new_v4().to_string(),
        text,
        timestamp: req.timestamp.unwrap_or(now),
        latitude: req.latitude,
        longitude: req.longitude,
        city,
        created_at: now,
    };

    info!(
        "Stored recording {} (city={})",
        recording.id,
        recording.city.as_deref().unwrap_or("-")
    );

    {
        let mut recordings = state.recordings.write().await;
        recordings.push(recording.clone());
    }

    (StatusCode::OK, Json(recording))
}

/// GET /api/recordings
pub async fn list_recordings(State(state): State<AppState>) -> impl IntoResponse {
    let recordings = state.recordings.read().await;
    Json(recordings.clone())
}

/// GET /api/recordings/:id
pub async fn get_recording(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let recordings = state.recordings.read().await;

    match recordings.iter().find(|r| r.id == id) {
        Some(recording) => (StatusCode::OK, Json(recording.clone())).into_response(),
        None => not_found(),
    }
}

/// DELETE /api/recordings/:id
pub async fn delete_recording(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut recordings = state.recordings.write().await;

    match recordings.iter().position(|r| r.id == id) {
        Some(index) => {
            recordings.remove(index);
            info!("Deleted recording {}", id);
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Recording deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        None => {
            warn!("Delete requested for unknown recording {}", id);
            not_found()
        }
    }
}

/// GET /healthz
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
