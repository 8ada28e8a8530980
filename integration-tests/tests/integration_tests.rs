use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

mod test_utils;
use test_utils::*;

/// End-to-end tests for the search page, driven through the real router and
/// templates against stubbed search backends.

#[tokio::test]
async fn index_shows_the_initial_empty_state() {
    let server = server_with(Arc::new(CannedSearcher(Vec::new())));

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    let html = response.text();
    assert!(html.contains("name=\"q\""), "search form should render");
    assert!(
        !html.contains("notification"),
        "no error banner on first load"
    );
}

#[tokio::test]
async fn searching_from_the_page_renders_results() {
    let server = server_with(Arc::new(CannedSearcher(vec![
        json!({
            "id": 1,
            "full_name": "vuejs/vue",
            "html_url": "https://github.com/vuejs/vue",
            "description": "The progressive framework",
            "stargazers_count": 207000
        }),
        json!({
            "id": 2,
            "full_name": "vuejs/core",
            "html_url": "https://github.com/vuejs/core"
        }),
    ])));

    let response = server.get("/").add_query_param("q", "vue").await;

    response.assert_status(StatusCode::OK);
    let html = response.text();
    assert!(html.contains("vuejs/vue"));
    assert!(html.contains("vuejs/core"));
    assert!(html.contains("The progressive framework"));
}

#[tokio::test]
async fn a_failed_search_shows_the_fixed_message() {
    let server = server_with(Arc::new(FailingSearcher));

    let response = server.get("/").add_query_param("q", "xyz").await;

    // Failures live in page state, not in the status code.
    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("Failed to fetch repositories"));
}

#[tokio::test]
async fn a_search_after_a_failure_clears_the_error() {
    let server = server_with(Arc::new(SequenceSearcher::new([
        Err(upstream_error()),
        Ok(vec![json!({
            "id": 1,
            "full_name": "rust-lang/rust",
            "html_url": "https://github.com/rust-lang/rust"
        })]),
    ])));

    let first = server.get("/").add_query_param("q", "first").await;
    assert!(first.text().contains("Failed to fetch repositories"));

    let second = server.get("/").add_query_param("q", "second").await;

    let html = second.text();
    assert!(html.contains("rust-lang/rust"));
    assert!(!html.contains("Failed to fetch repositories"));
}

#[tokio::test]
async fn htmx_requests_get_only_the_results_fragment() {
    let server = server_with(Arc::new(CannedSearcher(vec![json!({
        "id": 1,
        "full_name": "tokio-rs/axum",
        "html_url": "https://github.com/tokio-rs/axum"
    })])));

    let response = server
        .get("/search")
        .add_query_param("q", "axum")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status(StatusCode::OK);
    let html = response.text();
    assert!(html.contains("tokio-rs/axum"));
    assert!(
        !html.contains("<!DOCTYPE html>"),
        "fragment must not include the page shell"
    );
}

#[tokio::test]
async fn plain_requests_to_search_get_the_full_page() {
    let server = server_with(Arc::new(CannedSearcher(Vec::new())));

    let response = server.get("/search").add_query_param("q", "axum").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn unknown_routes_render_the_error_page() {
    let server = server_with(Arc::new(CannedSearcher(Vec::new())));

    let response = server.get("/definitely-not-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page Not Found"));
}
