//! Shared HTTP plumbing for the roster and vote requests.

use crate::config::Config;
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;

/// Why a request produced no usable body.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {0}")]
    Status(StatusCode),
}

/// One client per run. Every request carries the configured User-Agent and timeout.
pub fn build_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .build()
}

/// Sends `request` and returns the body text of a 2xx response.
pub async fn fetch_text(request: RequestBuilder) -> Result<String, FetchCause> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchCause::Status(status));
    }

    Ok(response.text().await?)
}
