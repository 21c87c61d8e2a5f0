use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::api::{Recording, RecordingApi};

/// Display state of a view backed by one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// Localized error message
    Failed(String),
    /// The service returned no recordings
    Empty,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// A view that fetches the recording list on activation
///
/// Dropping the view aborts an outstanding fetch, so a discarded view never
/// receives a late update.
pub struct ListView<T> {
    state: watch::Receiver<LoadState<T>>,
    task: JoinHandle<()>,
}

impl<T> ListView<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start the fetch; `derive` runs only on a non-empty list
    pub fn spawn<F>(api: Arc<dyn RecordingApi>, failure: &'static str, derive: F) -> Self
    where
        F: FnOnce(Vec<Recording>) -> T + Send + 'static,
    {
        let (tx, state) = watch::channel(LoadState::Loading);

        let task = tokio::spawn(async move {
            let next = match api.list_recordings().await {
                Ok(recordings) if recordings.is_empty() => LoadState::Empty,
                Ok(recordings) => {
                    debug!("Fetched {} recordings", recordings.len());
                    LoadState::Ready(derive(recordings))
                }
                Err(e) => {
                    error!("Error fetching recordings: {}", e);
                    LoadState::Failed(failure.to_string())
                }
            };

            if tx.send(next).is_err() {
                debug!("View discarded before fetch settled");
            }
        });

        Self { state, task }
    }

    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.clone()
    }

    /// Wait until the fetch has settled and return the resulting state
    pub async fn settled(&mut self) -> LoadState<T> {
        if let Ok(state) = self.state.wait_for(|s| !s.is_loading()).await {
            return state.clone();
        }
        self.state.borrow().clone()
    }
}

impl<T> Drop for ListView<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
