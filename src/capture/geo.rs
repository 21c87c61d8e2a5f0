use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A device position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("location unavailable: {0}")]
    Unavailable(String),

    #[error("location lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Source of the device position
///
/// Implementations may fail; the capture flow treats every failure as
/// "no coordinates" and carries on.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoPoint, GeoError>;
}

/// Locator that always reports the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub GeoPoint);

#[async_trait]
impl GeoLocator for FixedLocator {
    async fn locate(&self) -> Result<GeoPoint, GeoError> {
        Ok(self.0)
    }
}

/// Locator for devices without a position source
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocator;

#[async_trait]
impl GeoLocator for UnavailableLocator {
    async fn locate(&self) -> Result<GeoPoint, GeoError> {
        Err(GeoError::Unavailable("no position source configured".to_string()))
    }
}
