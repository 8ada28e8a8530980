use std::sync::Arc;

use axum::Router;
use common::{
    github::GithubClient,
    search::SearchStore,
    utils::config::get_config,
};
use html_router::{html_routes, html_state::HtmlState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    // Set up router state
    let github = Arc::new(GithubClient::new(&config)?);
    let search = SearchStore::new(github);
    let html_state = HtmlState::new(search, None);

    // Create Axum router
    let app = Router::new()
        .merge(html_routes(&html_state))
        .with_state(html_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
