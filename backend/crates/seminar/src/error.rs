//! Seminar Error Types
//!
//! Seminar-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::resolution_stage::ResolutionStage;

/// Seminar-specific result type alias
pub type SeminarResult<T> = Result<T, SeminarError>;

/// Seminar-specific error variants
#[derive(Debug, Error)]
pub enum SeminarError {
    /// Token has no `:` separator or one of its halves is empty
    #[error("Access token is malformed")]
    InvalidFormat,

    /// Identifier half is not a decimal number
    #[error("Access token carries an invalid seminar id")]
    InvalidId,

    /// Verification code does not match the claimed seminar id
    #[error("Access token verification failed")]
    HashMismatch,

    /// The seminar service has no such record
    #[error("Seminar not found")]
    NotFound,

    /// Listing query parameters could not be parsed
    #[error("Invalid list query: {0}")]
    InvalidQuery(String),

    /// Listing requires a bearer credential, or upstream rejected it
    #[error("Authentication required")]
    Unauthorized,

    /// Upstream refused the caller
    #[error("Access denied")]
    Forbidden,

    /// Transport failure or non-2xx answer from the seminar service
    #[error("Seminar service error: {message}")]
    ServiceError { kind: ErrorKind, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SeminarError {
    /// Service error carrying an upstream message, or a generic one
    pub fn service(kind: ErrorKind, message: Option<String>) -> Self {
        SeminarError::ServiceError {
            kind,
            message: message.unwrap_or_else(|| "The seminar service is unavailable".to_string()),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeminarError::InvalidFormat
            | SeminarError::InvalidId
            | SeminarError::InvalidQuery(_) => ErrorKind::BadRequest,
            SeminarError::HashMismatch | SeminarError::Forbidden => ErrorKind::Forbidden,
            SeminarError::NotFound => ErrorKind::NotFound,
            SeminarError::Unauthorized => ErrorKind::Unauthorized,
            SeminarError::ServiceError { kind, .. } => *kind,
            SeminarError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stage of the detail pipeline this error terminates
    pub fn stage(&self) -> Option<ResolutionStage> {
        match self {
            SeminarError::InvalidFormat | SeminarError::InvalidId => {
                Some(ResolutionStage::Decoding)
            }
            SeminarError::HashMismatch => Some(ResolutionStage::Validating),
            SeminarError::NotFound | SeminarError::ServiceError { .. } => {
                Some(ResolutionStage::Fetching)
            }
            SeminarError::InvalidQuery(_)
            | SeminarError::Unauthorized
            | SeminarError::Forbidden
            | SeminarError::Internal(_) => None,
        }
    }

    /// Message shown in the error panel
    pub fn user_message(&self) -> String {
        match self {
            SeminarError::InvalidFormat | SeminarError::InvalidId | SeminarError::HashMismatch => {
                "This seminar link is not valid".to_string()
            }
            SeminarError::NotFound => "The seminar could not be found".to_string(),
            SeminarError::InvalidQuery(reason) => reason.clone(),
            SeminarError::Unauthorized => "Please sign in to view seminars".to_string(),
            SeminarError::Forbidden => "You do not have access to these seminars".to_string(),
            SeminarError::ServiceError { message, .. } => message.clone(),
            SeminarError::Internal(_) => "Something went wrong".to_string(),
        }
    }

    fn action(&self) -> Option<&'static str> {
        match self {
            SeminarError::InvalidFormat | SeminarError::InvalidId | SeminarError::HashMismatch => {
                Some("Scan the QR code again or ask the coordinator for a new link")
            }
            SeminarError::ServiceError { .. } => Some("Reload the page to try again"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.user_message());
        match self.action() {
            Some(action) => err.with_action(action),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SeminarError::Internal(msg) => {
                tracing::error!(message = %msg, "Seminar internal error");
            }
            SeminarError::ServiceError { kind, message } => {
                tracing::error!(kind = %kind, message = %message, "Seminar service failure");
            }
            SeminarError::HashMismatch => {
                tracing::warn!("Seminar access token failed verification");
            }
            _ => {
                tracing::debug!(error = %self, stage = ?self.stage(), "Seminar error");
            }
        }
    }
}

impl From<SeminarError> for AppError {
    fn from(err: SeminarError) -> Self {
        err.to_app_error()
    }
}

impl From<reqwest::Error> for SeminarError {
    fn from(err: reqwest::Error) -> Self {
        let app_err = AppError::from(err);
        SeminarError::ServiceError {
            kind: app_err.kind(),
            message: app_err.message().to_string(),
        }
    }
}

impl From<platform::http::HttpClientError> for SeminarError {
    fn from(err: platform::http::HttpClientError) -> Self {
        SeminarError::Internal(err.to_string())
    }
}

impl IntoResponse for SeminarError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
