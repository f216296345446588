//! Outbound HTTP
//!
//! Client construction and URL helpers for calling the remote seminar API.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// Default User-Agent sent upstream
pub const DEFAULT_USER_AGENT: &str = concat!("seminar-gateway/", env!("CARGO_PKG_VERSION"));

/// Errors raised while preparing outbound requests
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Base URL cannot carry path segments: {0}")]
    CannotBeABase(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Outbound client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    /// `None` leaves the transport default (no overall timeout)
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Build a reusable reqwest client
///
/// The client pools connections and is cheap to clone.
pub fn build_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientError> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Parse a base URL, requiring http(s)
pub fn parse_base_url(raw: &str) -> Result<Url, HttpClientError> {
    let url = Url::parse(raw.trim()).map_err(|e| HttpClientError::InvalidBaseUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(HttpClientError::InvalidBaseUrl(format!(
                "unsupported scheme: {other}"
            )));
        }
    }
    if url.cannot_be_a_base() {
        return Err(HttpClientError::CannotBeABase(raw.to_string()));
    }
    Ok(url)
}

/// Append path segments to `base`, percent-encoding each segment
///
/// A trailing slash on `base` does not produce an empty segment.
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, HttpClientError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| HttpClientError::CannotBeABase(base.to_string()))?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url)
}

/// Pull the optional `message` field out of an upstream error body
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
