use axum::{
    extract::{FromRef, Query, State},
    routing::get,
    Router,
};

use crate::{
    html_state::HtmlState, middlewares::response_middleware::TemplateResponse,
    routes::search::SearchParams,
};

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    Router::new().route("/", get(index_handler))
}

/// The sole page. A bare visit renders whatever the store currently holds;
/// arriving with a `q` parameter runs the search first, so the page works
/// without any client-side scripting.
pub async fn index_handler(
    State(state): State<HtmlState>,
    Query(params): Query<SearchParams>,
) -> TemplateResponse {
    if let Some(query) = params.q {
        state.search.search_repos(&query).await;
    }

    let search = state.search.snapshot().await;
    TemplateResponse::new_template("index.html", search)
}
