use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::i18n::Locale;

/// Environment variable that overrides the recording service base URL
pub const API_URL_ENV: &str = "MEMOBREAD_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub capture: CaptureConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Progress ceiling for one session
    pub max_progress: u8,
    pub tick_interval_ms: u64,
    pub geolocation_timeout_secs: u64,
    /// Fixed device position, if this machine has one configured
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub locale: Locale,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_progress: 100,
            tick_interval_ms: 1000,
            geolocation_timeout_secs: 10,
            latitude: None,
            longitude: None,
        }
    }
}

impl CaptureConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_secs(self.geolocation_timeout_secs)
    }
}

impl Config {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Environment keys use the `MEMOBREAD_` prefix with `__` as the section
    /// separator (`MEMOBREAD_API__BASE_URL`). `MEMOBREAD_API_URL` wins over
    /// everything else for the service base URL.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api.base_url", DEFAULT_API_URL)?
            .set_default("api.timeout_secs", 30)?
            .set_default("capture.max_progress", 100)?
            .set_default("capture.tick_interval_ms", 1000)?
            .set_default("capture.geolocation_timeout_secs", 10)?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("ui.locale", "zh-CN")?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        } else {
            builder = builder.add_source(config::File::with_name("memobread").required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("MEMOBREAD")
                .prefix_separator("_")
                .separator("__"),
        );

        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.set_override("api.base_url", url)?;
        }

        let settings = builder.build().context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
