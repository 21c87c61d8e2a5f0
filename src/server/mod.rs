//! Development stub of the recording service
//!
//! Serves the same REST surface the client talks to, backed by memory:
//! - POST /api/recordings - Store a recording with a placeholder transcription
//! - GET /api/recordings - List recordings in insertion order
//! - GET /api/recordings/:id - Fetch one recording
//! - DELETE /api/recordings/:id - Delete a recording
//! - GET /healthz - Health check

mod geocode;
mod handlers;
mod routes;
mod speech;
mod state;

pub use geocode::{nearest_city, MAX_CITY_DISTANCE_KM};
pub use routes::{create_router, serve};
pub use speech::{transcribe, FALLBACK_TRANSCRIPT, PLACEHOLDER_TRANSCRIPT};
pub use state::AppState;
