use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use url::Url;

use crate::{error::AppError, utils::config::AppConfig};

/// A repository as returned by the search API. The shape is opaque to us:
/// items are handed to the views exactly as received, without validation.
pub type Repository = serde_json::Value;

/// Seam between the search store and the remote search API, so tests can
/// substitute a canned backend.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>, AppError>;
}

#[derive(Debug, Deserialize)]
struct SearchRepositoriesResponse {
    items: Vec<Repository>,
}

/// Thin client for the public GitHub search API. Requests are anonymous and
/// subject to the API's unauthenticated rate limits.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        // GitHub rejects requests that carry no User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(&config.github_user_agent)
            .build()?;
        let base_url = Url::parse(&config.github_api_url)?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl RepositorySearch for GithubClient {
    async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>, AppError> {
        let mut url = self.base_url.join("search/repositories")?;
        url.query_pairs_mut().append_pair("q", query);

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchRepositoriesResponse = serde_json::from_str(&body)?;

        Ok(parsed.items)
    }
}
