//! Application Configuration
//!
//! Configuration for the seminar application layer.

use platform::http::{HttpClientConfig, HttpClientError, parse_base_url};
use reqwest::Url;

use crate::domain::value_object::shared_secret::SharedSecret;

/// Remote seminar API used in development
pub const DEV_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Public seminar-detail page used in development
pub const DEV_PUBLIC_DETAIL_URL: &str = "http://localhost:40922/seminar/detail";

/// Seminar application configuration
#[derive(Debug)]
pub struct SeminarConfig {
    /// Secret mixed into verification codes (immutable after startup)
    pub access_secret: SharedSecret,
    /// Base URL of the remote seminar API
    pub api_base_url: Url,
    /// Public detail page that access links point at
    pub public_detail_url: Url,
    /// Outbound client settings
    pub http: HttpClientConfig,
}

impl SeminarConfig {
    pub fn new(
        access_secret: SharedSecret,
        api_base_url: &str,
        public_detail_url: &str,
    ) -> Result<Self, HttpClientError> {
        Ok(Self {
            access_secret,
            api_base_url: parse_base_url(api_base_url)?,
            public_detail_url: parse_base_url(public_detail_url)?,
            http: HttpClientConfig::default(),
        })
    }

    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }
}
