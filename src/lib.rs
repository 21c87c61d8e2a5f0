pub mod api;
pub mod app;
pub mod capture;
pub mod config;
pub mod format;
pub mod i18n;
pub mod render;
pub mod router;
pub mod server;
pub mod views;

pub use api::{
    ApiError, HttpRecordingClient, Recording, RecordingApi, RecordingCreateRequest, SearchQuery,
    SearchResult,
};
pub use app::{ActiveView, App, Services};
pub use capture::{
    AudioSource, CaptureFlow, CapturePhase, CaptureResult, CaptureSession, FixedLocator,
    GeoLocator, GeoPoint, PlaceholderAudio, UnavailableLocator,
};
pub use config::Config;
pub use i18n::{Locale, Messages};
pub use router::{Page, Router};
pub use views::{
    group_by_city, search, HistoryView, LoadState, LocationGroup, LocationsView,
    PlaceholderScorer, RelevanceScorer, SearchState, SearchView,
};
