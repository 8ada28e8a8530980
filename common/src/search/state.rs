use serde::Serialize;

use crate::github::Repository;

/// The one user-facing failure message. Every search error collapses into
/// this string; the cause is only visible in the logs.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch repositories";

/// Outcome of a single search request, cause already collapsed.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Success(Vec<Repository>),
    Failure,
}

/// Transition events applied to [`SearchState`]. The store allocates request
/// ids monotonically, so the state can tell a current completion from a
/// stale one.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    Started { request: u64, query: String },
    Completed { request: u64, outcome: SearchOutcome },
}

/// Shared search state: the last submitted query, the results of the last
/// successful search that was still current when it resolved, the in-flight
/// flag and the collapsed error message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Repository>,
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip)]
    latest_request: u64,
}

impl SearchState {
    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Started { request, query } => {
                self.loading = true;
                self.error = None;
                self.query = query;
                self.latest_request = request;
            }
            SearchEvent::Completed { request, outcome } => {
                // A newer search owns the state now; its Started event moved
                // latest_request past this one.
                if request != self.latest_request {
                    return;
                }
                match outcome {
                    SearchOutcome::Success(items) => self.results = items,
                    SearchOutcome::Failure => {
                        self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                    }
                }
                self.loading = false;
            }
        }
    }
}
