//! Recording capture flow
//!
//! This module owns one capture session at a time:
//! - A once-per-second ticker driving elapsed time and progress
//! - Best-effort device location lookup
//! - Payload assembly and the single create request on stop

mod audio;
mod flow;
mod geo;
mod session;
mod ticker;

pub use audio::{AudioSource, PlaceholderAudio, EMPTY_WAV};
pub use flow::CaptureFlow;
pub use geo::{FixedLocator, GeoError, GeoLocator, GeoPoint, UnavailableLocator};
pub use session::{CaptureResult, CapturePhase, CaptureSession};
pub use ticker::Ticker;
