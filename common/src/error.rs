use thiserror::Error;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Upstream error: {status} from {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}
