//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex, constant-time comparison)
//! - Outbound HTTP client construction for the seminar API
//! - Incoming request header helpers

pub mod client;
pub mod crypto;
pub mod http;
