//! HTTP Repository Implementation
//!
//! Talks to the remote seminar API:
//! - `GET {base}/seminars/{id}` -> `{ "seminar": {...} }`
//! - `GET {base}/seminars` -> `{ "seminars": [...] }`
//!
//! One request per call. No retries, no caching.

use kernel::error::kind::ErrorKind;
use kernel::id::SeminarId;
use platform::http::{build_client, extract_error_message, join_segments};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;

use crate::application::config::SeminarConfig;
use crate::domain::entity::seminar::Seminar;
use crate::domain::repository::SeminarRepository;
use crate::error::{SeminarError, SeminarResult};

#[derive(Debug, Deserialize)]
struct SeminarEnvelope {
    #[serde(default)]
    seminar: Option<Seminar>,
}

#[derive(Debug, Deserialize)]
struct SeminarListEnvelope {
    #[serde(default)]
    seminars: Vec<Seminar>,
}

/// Seminar repository backed by the remote seminar API
#[derive(Clone)]
pub struct HttpSeminarRepository {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSeminarRepository {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Build the client from config
    pub fn from_config(config: &SeminarConfig) -> SeminarResult<Self> {
        let client = build_client(&config.http)?;
        Ok(Self::new(client, config.api_base_url.clone()))
    }
}

impl SeminarRepository for HttpSeminarRepository {
    async fn find_by_id(&self, seminar_id: SeminarId) -> SeminarResult<Option<Seminar>> {
        let id = seminar_id.to_string();
        let url = join_segments(&self.base_url, &["seminars", &id])?;

        tracing::debug!(seminar_id = %seminar_id, "Fetching seminar");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::debug!(seminar_id = %seminar_id, "Seminar service reported no record");
                Ok(None)
            }
            status if status.is_success() => {
                let body: SeminarEnvelope = response.json().await?;
                Ok(body.seminar)
            }
            _ => Err(upstream_failure(response).await),
        }
    }

    async fn list(&self, bearer_token: &str) -> SeminarResult<Vec<Seminar>> {
        let url = join_segments(&self.base_url, &["seminars"])?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {bearer_token}"))
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(SeminarError::Unauthorized),
            StatusCode::FORBIDDEN => Err(SeminarError::Forbidden),
            status if status.is_success() => {
                let body: SeminarListEnvelope = response.json().await?;
                Ok(body.seminars)
            }
            _ => Err(upstream_failure(response).await),
        }
    }
}

/// Turn a non-2xx response into `ServiceError`, keeping the upstream message
async fn upstream_failure(response: Response) -> SeminarError {
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_error_message(&body));

    tracing::warn!(
        status = status.as_u16(),
        upstream_message = message.as_deref().unwrap_or("-"),
        "Seminar service returned an error"
    );

    let kind = match ErrorKind::from_upstream_status(status.as_u16()) {
        kind @ (ErrorKind::ServiceUnavailable | ErrorKind::GatewayTimeout) => kind,
        _ => ErrorKind::BadGateway,
    };

    SeminarError::service(kind, message)
}
