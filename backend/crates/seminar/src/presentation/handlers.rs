//! HTTP Handlers

use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use std::net::SocketAddr;
use std::sync::Arc;

use kernel::pagination::PageRequest;
use platform::client::{extract_bearer_token, extract_client_ip};

use crate::application::config::SeminarConfig;
use crate::application::{ListSeminarsInput, ListSeminarsUseCase, ResolveSeminarDetailUseCase};
use crate::domain::repository::SeminarRepository;
use crate::error::{SeminarError, SeminarResult};
use crate::presentation::dto::{
    ListSeminarsQuery, ListSeminarsResponse, SeminarDetailQuery, SeminarDetailResponse,
};

/// Shared state for seminar handlers
#[derive(Clone)]
pub struct SeminarAppState<R>
where
    R: SeminarRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<SeminarConfig>,
}

// ============================================================================
// Seminar Detail
// ============================================================================

/// GET /api/seminars/detail?id=<token>
pub async fn seminar_detail<R>(
    State(state): State<SeminarAppState<R>>,
    headers: HeaderMap,
    connect_info: Option<Extension<ConnectInfo<SocketAddr>>>,
    query: Result<Query<SeminarDetailQuery>, QueryRejection>,
) -> SeminarResult<Json<SeminarDetailResponse>>
where
    R: SeminarRepository + Clone + Send + Sync + 'static,
{
    let direct_ip = connect_info.map(|Extension(ConnectInfo(addr))| addr.ip());
    let client_ip = extract_client_ip(&headers, direct_ip);

    // 読めないクエリや空の id はトークンなしと同じ扱い
    let raw_token = query
        .ok()
        .and_then(|Query(query)| query.id)
        .filter(|id| !id.is_empty())
        .ok_or(SeminarError::InvalidFormat)
        .inspect_err(|_| {
            tracing::debug!(client_ip = ?client_ip, "Seminar detail requested without a token");
        })?;

    let use_case = ResolveSeminarDetailUseCase::new(state.repo.clone(), state.config.clone());
    let seminar = use_case.execute(&raw_token).await.inspect_err(|e| {
        if matches!(e, SeminarError::HashMismatch) {
            tracing::warn!(client_ip = ?client_ip, "Rejected forged seminar link");
        }
    })?;

    Ok(Json(SeminarDetailResponse { seminar }))
}

// ============================================================================
// Seminar List
// ============================================================================

/// GET /api/seminars?page=&perPage=&sortBy=&order=
pub async fn list_seminars<R>(
    State(state): State<SeminarAppState<R>>,
    headers: HeaderMap,
    query: Result<Query<ListSeminarsQuery>, QueryRejection>,
) -> SeminarResult<Json<ListSeminarsResponse>>
where
    R: SeminarRepository + Clone + Send + Sync + 'static,
{
    let Query(query) =
        query.map_err(|rejection| SeminarError::InvalidQuery(rejection.body_text()))?;

    let use_case = ListSeminarsUseCase::new(state.repo.clone());

    let input = ListSeminarsInput {
        bearer_token: extract_bearer_token(&headers),
        page: PageRequest::new(query.page, query.per_page),
        sort_key: query.sort_by.unwrap_or_default(),
        sort_order: query.order.unwrap_or_default(),
    };

    let page = use_case.execute(input).await?;

    Ok(Json(page))
}
