//! HTTP client wrapper - fetches and deserializes the item list

use thiserror::Error;

use crate::constants::REQUEST_TIMEOUT;
use crate::models::ItemRecord;

/// Why a fetch failed, classified for logging and display
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Other(e.to_string())
        }
    }
}

/// Issue one GET against the items endpoint and deserialize the JSON array
pub async fn fetch_items(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<ItemRecord>, FetchError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let items = response.json::<Vec<ItemRecord>>().await?;
    Ok(items)
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
