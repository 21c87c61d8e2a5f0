use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::api::{Recording, RecordingApi, SearchQuery, SearchResult};
use crate::i18n::Messages;

/// Ranks a matching recording against a query; higher is more relevant
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, query: &str, recording: &Recording) -> f64;
}

/// Uniform random score in `[0.5, 1.0)`
///
/// Stand-in until a real similarity measure exists. Scores are volatile and
/// only the descending order they induce is meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScorer;

impl RelevanceScorer for PlaceholderScorer {
    fn score(&self, _query: &str, _recording: &Recording) -> f64 {
        // 52 random bits from a v4 UUID, mapped onto [0, 1)
        let (bits, _) = Uuid::new_v4().as_u64_pair();
        let unit = (bits >> 12) as f64 / (1u64 << 52) as f64;
        0.5 + unit * 0.5
    }
}

/// Filter, score and rank recordings for a query
///
/// Only recordings whose text contains the query (case-insensitive) are
/// kept. Results are ordered by descending score, then cut to the limit.
pub fn search(
    recordings: &[Recording],
    query: &SearchQuery,
    scorer: &dyn RelevanceScorer,
) -> Vec<SearchResult> {
    let needle = query.query.to_lowercase();

    let mut results: Vec<SearchResult> = recordings
        .iter()
        .filter(|r| r.text.to_lowercase().contains(&needle))
        .map(|r| SearchResult::from_recording(r, scorer.score(&query.query, r)))
        .collect();

    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    if let Some(limit) = query.limit {
        results.truncate(limit);
    }

    results
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search submitted yet
    Idle,
    Searching,
    /// Localized error message
    Failed(String),
    /// Ranked matches, possibly none
    Results(Vec<SearchResult>),
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching)
    }
}

/// Free-text search over the full recording list
pub struct SearchView {
    api: Arc<dyn RecordingApi>,
    scorer: Arc<dyn RelevanceScorer>,
    messages: &'static Messages,
    limit: Option<usize>,
    state: Arc<watch::Sender<SearchState>>,
    task: Option<JoinHandle<()>>,
}

impl SearchView {
    pub fn new(
        api: Arc<dyn RecordingApi>,
        scorer: Arc<dyn RelevanceScorer>,
        messages: &'static Messages,
        limit: Option<usize>,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);

        Self {
            api,
            scorer,
            messages,
            limit,
            state: Arc::new(state),
            task: None,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Run a search. A blank query does nothing and keeps prior results.
    ///
    /// A new submission supersedes one still in flight.
    pub fn submit(&mut self, text: &str) -> bool {
        let query = SearchQuery::new(text).with_limit(self.limit);
        if query.is_blank() {
            return false;
        }

        if let Some(previous) = self.task.take() {
            previous.abort();
        }

        self.state.send_replace(SearchState::Searching);
        info!("Searching memories for {:?}", query.query);

        let api = Arc::clone(&self.api);
        let scorer = Arc::clone(&self.scorer);
        let state = Arc::clone(&self.state);
        let failure = self.messages.search_failed;

        self.task = Some(tokio::spawn(async move {
            let next = match api.list_recordings().await {
                Ok(recordings) => {
                    let results = search(&recordings, &query, scorer.as_ref());
                    debug!("{} of {} recordings matched", results.len(), recordings.len());
                    SearchState::Results(results)
                }
                Err(e) => {
                    error!("Error searching memories: {}", e);
                    SearchState::Failed(failure.to_string())
                }
            };
            state.send_replace(next);
        }));

        true
    }

    /// Wait for the current search to finish
    pub async fn settled(&self) -> SearchState {
        let mut rx = self.state.subscribe();
        if let Ok(state) = rx.wait_for(|s| !s.is_searching()).await {
            return state.clone();
        }
        self.state()
    }
}

impl Drop for SearchView {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
