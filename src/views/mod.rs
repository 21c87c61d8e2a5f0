//! Views over the recording collection
//!
//! Each view fetches the full collection once and derives what it shows:
//! - History: the list in service order
//! - Locations: recordings grouped by city
//! - Search: case-insensitive text matches ranked by relevance score

mod history;
mod load;
mod locations;
mod search;

pub use history::HistoryView;
pub use load::{ListView, LoadState};
pub use locations::{group_by_city, LocationGroup, LocationsView};
pub use search::{search, PlaceholderScorer, RelevanceScorer, SearchState, SearchView};
