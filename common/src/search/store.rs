use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::RwLock;
use tracing::warn;

use crate::github::{Repository, RepositorySearch};

use super::state::{SearchEvent, SearchOutcome, SearchState};

/// Single source of truth for the search lifecycle. One store is created at
/// startup and shared by every request handler; all mutation goes through
/// [`SearchState::apply`].
#[derive(Clone)]
pub struct SearchStore {
    searcher: Arc<dyn RepositorySearch>,
    state: Arc<RwLock<SearchState>>,
    next_request: Arc<AtomicU64>,
}

impl SearchStore {
    pub fn new(searcher: Arc<dyn RepositorySearch>) -> Self {
        Self {
            searcher,
            state: Arc::new(RwLock::new(SearchState::default())),
            next_request: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Runs one search and folds the outcome into the shared state.
    ///
    /// The query is passed to the backend as-is, empty strings included.
    /// Failures never escape: the cause is logged here and callers only see
    /// the fixed message in the error field. Overlapping calls are allowed;
    /// completions that lost the race to a newer search are dropped by
    /// [`SearchState::apply`].
    pub async fn search_repos(&self, query: &str) {
        let request = self.next_request.fetch_add(1, Ordering::Relaxed);
        self.state.write().await.apply(SearchEvent::Started {
            request,
            query: query.to_owned(),
        });

        let outcome = match self.searcher.search_repositories(query).await {
            Ok(items) => SearchOutcome::Success(items),
            Err(err) => {
                warn!(error = %err, query, "repository search failed");
                SearchOutcome::Failure
            }
        };

        self.state
            .write()
            .await
            .apply(SearchEvent::Completed { request, outcome });
    }

    /// A point-in-time copy of the whole state, for rendering.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    pub async fn results(&self) -> Vec<Repository> {
        self.state.read().await.results.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
    }
}
