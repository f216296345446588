//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal("I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_gateway("Upstream returned malformed JSON").with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// reqwest conversions (feature-gated)
// ============================================================================

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::gateway_timeout("Upstream service timed out").with_source(err);
        }
        if err.is_connect() {
            return AppError::service_unavailable("Upstream service unreachable").with_source(err);
        }
        if err.is_decode() {
            return AppError::bad_gateway("Upstream returned an unreadable body").with_source(err);
        }
        AppError::bad_gateway("Upstream request failed").with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_problem())).into_response()
    }
}
