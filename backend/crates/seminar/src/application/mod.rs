//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod issue_link;
pub mod list_seminars;
pub mod resolve_detail;

// Re-exports
pub use config::SeminarConfig;
pub use issue_link::{AccessLink, issue_access_link};
pub use list_seminars::{ListSeminarsInput, ListSeminarsUseCase};
pub use resolve_detail::{ResolveSeminarDetailUseCase, verify_access_token};
