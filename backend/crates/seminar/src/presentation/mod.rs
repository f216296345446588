//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::SeminarAppState;
pub use router::{seminar_router, seminar_router_generic};
