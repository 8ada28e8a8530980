use axum::{
    extract::{FromRef, Query, State},
    routing::get,
    Router,
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::{html_state::HtmlState, middlewares::response_middleware::TemplateResponse};

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    Router::new().route("/search", get(search_result_handler))
}

/// Query parameters for a search request. A present-but-empty `q` is kept:
/// the term is forwarded to the API exactly as submitted.
#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Runs a search and renders the outcome. htmx requests get just the
/// results block for an in-place swap; everything else gets the full page,
/// which keeps the URL shareable and the form usable without scripting.
pub async fn search_result_handler(
    State(state): State<HtmlState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<SearchParams>,
) -> TemplateResponse {
    if let Some(query) = params.q {
        state.search.search_repos(&query).await;
    }

    let search = state.search.snapshot().await;

    if is_htmx {
        TemplateResponse::new_partial("index.html", "results", search)
    } else {
        TemplateResponse::new_template("index.html", search)
    }
}
