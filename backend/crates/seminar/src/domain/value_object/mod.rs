//! Value Object Module

pub mod access_token;
pub mod resolution_stage;
pub mod shared_secret;
pub mod verification_code;
