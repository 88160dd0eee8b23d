use std::time::Duration;

use msm_common::error::{MsmError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

const DOWNLOAD_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str = "msm server manager (Rust)";

pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| MsmError::HttpError(format!("Failed to build HTTP client: {e}")))
}

/// GETs `url` and returns the body, failing on any non-success status.
pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await.map_err(|e| {
        debug!("HTTP request failed for {url}: {e}");
        MsmError::HttpError(format!("HTTP request failed for {url}: {e}"))
    })?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, url);

    if !status.is_success() {
        return Err(match status {
            StatusCode::NOT_FOUND => MsmError::HttpError(format!("Resource not found (404): {url}")),
            StatusCode::FORBIDDEN => MsmError::HttpError(format!("Access forbidden (403): {url}")),
            _ => MsmError::HttpError(format!("HTTP error {status} for URL {url}")),
        });
    }

    let content = response
        .bytes()
        .await
        .map_err(|e| MsmError::HttpError(format!("Failed to read response body bytes: {e}")))?;
    debug!("Read {} bytes from {}", content.len(), url);
    Ok(content.to_vec())
}

/// GETs `url` and decodes the body as JSON.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let body = get_bytes(client, url).await?;
    serde_json::from_slice(&body).map_err(MsmError::from)
}
