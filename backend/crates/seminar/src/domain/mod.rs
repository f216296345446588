//! Domain Layer
//!
//! This layer contains:
//! - The seminar entity as served by the remote API
//! - Token value objects (access token, shared secret, verification code)
//! - Domain services (list sorting)
//! - Repository traits (interfaces)

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::seminar::{Lecturer, Seminar, SeminarType, Student};
pub use repository::SeminarRepository;
pub use value_object::access_token::AccessToken;
pub use value_object::shared_secret::SharedSecret;
