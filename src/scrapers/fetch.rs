//! HTTP fetcher: one GET, fixed headers, no timeout, body as text.

use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, USER_AGENT};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Build the shared client with the fixed header set.
pub fn build_client(user_agent: &str) -> Result<Client, Box<dyn std::error::Error>> {
    let mut headers = HeaderMap::new();
    let value: HeaderValue = user_agent
        .parse()
        .map_err(|e: InvalidHeaderValue| format!("invalid user agent {user_agent:?}: {e}"))?;
    headers.insert(USER_AGENT, value);
    Ok(Client::builder().default_headers(headers).build()?)
}

/// GET `url` and return the body, treating any non-2xx status as a failure.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(transport)?;
    debug!(bytes = body.len(), %status, "Fetched page");
    Ok(body)
}
