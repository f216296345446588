//! Client identification utilities
//!
//! Header helpers for incoming requests: caller IP (for logs) and bearer
//! credentials that are forwarded untouched to the seminar API.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}

/// Extract the credential from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Returns `None` for other schemes
/// or an empty credential.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let credential = credential.trim();
    if credential.is_empty() {
        return None;
    }
    Some(credential.to_string())
}
