use std::sync::Arc;

use super::load::ListView;
use crate::api::{Recording, RecordingApi};
use crate::i18n::Messages;

/// Recordings in the order the service returned them
pub type HistoryView = ListView<Vec<Recording>>;

impl HistoryView {
    pub fn activate(api: Arc<dyn RecordingApi>, messages: &'static Messages) -> Self {
        Self::spawn(api, messages.history_failed, |recordings| recordings)
    }
}
