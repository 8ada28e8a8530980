use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use common::error::AppError;
use common::github::{Repository, RepositorySearch};
use common::search::SearchStore;
use html_router::{html_routes, html_state::HtmlState};

/// Searcher that always returns the same items.
pub struct CannedSearcher(pub Vec<Repository>);

#[async_trait]
impl RepositorySearch for CannedSearcher {
    async fn search_repositories(&self, _query: &str) -> Result<Vec<Repository>, AppError> {
        Ok(self.0.clone())
    }
}

/// Searcher that always fails, like an unreachable or throttled API.
pub struct FailingSearcher;

#[async_trait]
impl RepositorySearch for FailingSearcher {
    async fn search_repositories(&self, _query: &str) -> Result<Vec<Repository>, AppError> {
        Err(upstream_error())
    }
}

/// Searcher that answers successive searches from a queue of outcomes.
pub struct SequenceSearcher(
    pub tokio::sync::Mutex<std::collections::VecDeque<Result<Vec<Repository>, AppError>>>,
);

impl SequenceSearcher {
    pub fn new(
        responses: impl IntoIterator<Item = Result<Vec<Repository>, AppError>>,
    ) -> Self {
        Self(tokio::sync::Mutex::new(responses.into_iter().collect()))
    }
}

#[async_trait]
impl RepositorySearch for SequenceSearcher {
    async fn search_repositories(&self, _query: &str) -> Result<Vec<Repository>, AppError> {
        self.0
            .lock()
            .await
            .pop_front()
            .expect("one canned response per search")
    }
}

pub fn upstream_error() -> AppError {
    // reqwest re-exports the same http StatusCode axum uses.
    AppError::UpstreamStatus {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        url: "http://localhost/search/repositories".to_string(),
    }
}

/// Spins up the full page router around the given search backend.
pub fn server_with(searcher: Arc<dyn RepositorySearch>) -> TestServer {
    let html_state = HtmlState::new(SearchStore::new(searcher), None);
    let app: Router = Router::new()
        .merge(html_routes(&html_state))
        .with_state(html_state);

    TestServer::new(app).expect("test server should build")
}
