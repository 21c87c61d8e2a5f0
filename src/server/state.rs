use crate::api::Recording;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Stored recordings in insertion order
    pub recordings: Arc<RwLock<Vec<Recording>>>,

    /// Label stored when coordinates match no known city
    pub unknown_city: &'static str,
}

impl AppState {
    pub fn new(unknown_city: &'static str) -> Self {
        Self {
            recordings: Arc::new(RwLock::new(Vec::new())),
            unknown_city,
        }
    }
}
