//! Seminar Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Seminar entity, access-token value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Remote seminar API client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public seminar detail pages reached through QR-code deep links
//! - Coordinator seminar tables (sorted, paginated) behind a bearer credential
//! - Access link issuing for QR generation
//!
//! ## Access Tokens
//! A link carries `id=<verification code>:su<seminar id>`, where the
//! verification code is the lowercase hex SHA-256 of the decimal id followed
//! by a shared secret. A token is checked before anything is fetched, so a
//! forged or edited link never reaches the seminar API.
//!
//! The scheme keeps casual visitors from enumerating seminars. It is not an
//! authentication mechanism: tokens never expire and cannot be revoked short
//! of rotating the secret.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SeminarConfig;
pub use application::issue_link::{AccessLink, issue_access_link};
pub use application::resolve_detail::verify_access_token;
pub use domain::value_object::access_token::AccessToken;
pub use domain::value_object::shared_secret::SharedSecret;
pub use error::{SeminarError, SeminarResult};
pub use infra::http::HttpSeminarRepository;
pub use presentation::router::seminar_router;

#[cfg(test)]
mod tests;
