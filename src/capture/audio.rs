use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A 44-byte WAV header with no samples (8 kHz, mono, 16-bit)
pub const EMPTY_WAV: [u8; 44] = [
    b'R', b'I', b'F', b'F', 36, 0, 0, 0, b'W', b'A', b'V', b'E', //
    b'f', b'm', b't', b' ', 16, 0, 0, 0, 1, 0, 1, 0, //
    0x40, 0x1f, 0, 0, 0x80, 0x3e, 0, 0, 2, 0, 16, 0, //
    b'd', b'a', b't', b'a', 0, 0, 0, 0,
];

/// Produces the audio clip submitted at the end of a session
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Encoded clip covering `duration` of capture
    async fn clip(&self, duration: Duration) -> Result<Vec<u8>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Stands in for device capture: every clip is the same empty WAV
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAudio;

#[async_trait]
impl AudioSource for PlaceholderAudio {
    async fn clip(&self, _duration: Duration) -> Result<Vec<u8>> {
        Ok(EMPTY_WAV.to_vec())
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
