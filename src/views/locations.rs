use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::load::ListView;
use crate::api::{Recording, RecordingApi};
use crate::i18n::Messages;

/// Recordings sharing one city key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationGroup {
    pub city: String,
    pub recordings: Vec<Recording>,
}

impl LocationGroup {
    pub fn count(&self) -> usize {
        self.recordings.len()
    }
}

/// Partition recordings by city
///
/// Recordings without a city land in the `unknown` bucket. Groups appear in
/// order of first occurrence and keep service order inside.
pub fn group_by_city(recordings: Vec<Recording>, unknown: &str) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recording in recordings {
        let key = match recording.city.as_deref() {
            Some(city) if !city.is_empty() => city.to_string(),
            _ => unknown.to_string(),
        };

        match index.get(&key) {
            Some(&i) => groups[i].recordings.push(recording),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(LocationGroup {
                    city: key,
                    recordings: vec![recording],
                });
            }
        }
    }

    groups
}

pub type LocationsView = ListView<Vec<LocationGroup>>;

impl LocationsView {
    pub fn activate(api: Arc<dyn RecordingApi>, messages: &'static Messages) -> Self {
        let unknown = messages.unknown_location;
        Self::spawn(api, messages.locations_failed, move |recordings| {
            group_by_city(recordings, unknown)
        })
    }
}
