//! Seminar Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::SeminarConfig;
use crate::domain::repository::SeminarRepository;
use crate::infra::http::HttpSeminarRepository;
use crate::presentation::handlers::{self, SeminarAppState};

/// Create the Seminar router backed by the remote seminar API
pub fn seminar_router(repo: HttpSeminarRepository, config: SeminarConfig) -> Router {
    seminar_router_generic(repo, config)
}

/// Create a generic Seminar router for any repository implementation
pub fn seminar_router_generic<R>(repo: R, config: SeminarConfig) -> Router
where
    R: SeminarRepository + Clone + Send + Sync + 'static,
{
    let state = SeminarAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_seminars::<R>))
        .route("/detail", get(handlers::seminar_detail::<R>))
        .with_state(state)
}
