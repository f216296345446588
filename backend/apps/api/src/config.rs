//! Environment Configuration
//!
//! Reads process configuration once at startup. Missing or malformed
//! required values abort startup.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use platform::http::HttpClientConfig;
use seminar::application::config::{DEV_API_BASE_URL, DEV_PUBLIC_DETAIL_URL};
use seminar::{SeminarConfig, SharedSecret};

pub const ENV_ACCESS_SECRET: &str = "SEMINAR_ACCESS_SECRET";
pub const ENV_API_BASE_URL: &str = "SEMINAR_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "SEMINAR_API_TIMEOUT_SECS";
pub const ENV_PUBLIC_DETAIL_URL: &str = "PUBLIC_DETAIL_URL";
pub const ENV_FRONTEND_ORIGINS: &str = "FRONTEND_ORIGINS";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// API server configuration
#[derive(Debug)]
pub struct ApiConfig {
    pub seminar: SeminarConfig,
    pub frontend_origins: Vec<HeaderValue>,
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_var)
    }

    /// Load using `lookup` for each variable
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seminar = seminar_config_from_lookup(&lookup)?;

        let origins = lookup(ENV_FRONTEND_ORIGINS)
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins = parse_origins(&origins);

        let bind_addr = lookup(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{ENV_BIND_ADDR} is not a socket address"))?;

        Ok(Self {
            seminar,
            frontend_origins,
            bind_addr,
        })
    }
}

/// Seminar configuration from the process environment
pub fn seminar_config_from_env() -> anyhow::Result<SeminarConfig> {
    seminar_config_from_lookup(&env_var)
}

fn seminar_config_from_lookup<F>(lookup: &F) -> anyhow::Result<SeminarConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let secret = lookup(ENV_ACCESS_SECRET)
        .with_context(|| format!("{ENV_ACCESS_SECRET} must be set in environment"))?;
    let secret =
        SharedSecret::new(secret).with_context(|| format!("{ENV_ACCESS_SECRET} is invalid"))?;

    let api_base_url = match lookup(ENV_API_BASE_URL) {
        Some(url) => url,
        None if cfg!(debug_assertions) => DEV_API_BASE_URL.to_string(),
        None => bail!("{ENV_API_BASE_URL} must be set in production"),
    };
    let public_detail_url =
        lookup(ENV_PUBLIC_DETAIL_URL).unwrap_or_else(|| DEV_PUBLIC_DETAIL_URL.to_string());

    let timeout = lookup(ENV_API_TIMEOUT_SECS)
        .map(|raw| {
            raw.parse::<u64>()
                .with_context(|| format!("{ENV_API_TIMEOUT_SECS} must be a whole number of seconds"))
        })
        .transpose()?
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let config = SeminarConfig::new(secret, &api_base_url, &public_detail_url)
        .context("invalid seminar service URL")?
        .with_http(HttpClientConfig {
            timeout,
            ..HttpClientConfig::default()
        });

    Ok(config)
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

// 空文字は未設定と同じ扱い
fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
