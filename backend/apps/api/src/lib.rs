//! API Application
//!
//! Shared startup code for the `api` server and the `issue-link` tool.

pub mod config;
