//! List Seminars Use Case

use std::sync::Arc;

use kernel::pagination::{Page, PageRequest, paginate};

use crate::domain::entity::seminar::Seminar;
use crate::domain::repository::SeminarRepository;
use crate::domain::services::{SortKey, SortOrder, sort_seminars};
use crate::error::{SeminarError, SeminarResult};

/// Input DTO for list seminars
#[derive(Debug, Clone, Default)]
pub struct ListSeminarsInput {
    /// Caller's credential, forwarded to the seminar API
    pub bearer_token: Option<String>,
    pub page: PageRequest,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

/// List Seminars Use Case
pub struct ListSeminarsUseCase<R>
where
    R: SeminarRepository,
{
    seminar_repo: Arc<R>,
}

impl<R> ListSeminarsUseCase<R>
where
    R: SeminarRepository,
{
    pub fn new(seminar_repo: Arc<R>) -> Self {
        Self { seminar_repo }
    }

    pub async fn execute(&self, input: ListSeminarsInput) -> SeminarResult<Page<Seminar>> {
        let bearer_token = input.bearer_token.ok_or(SeminarError::Unauthorized)?;

        let mut seminars = self.seminar_repo.list(&bearer_token).await?;
        sort_seminars(&mut seminars, input.sort_key, input.sort_order);

        let page = paginate(seminars, input.page);

        tracing::debug!(
            total = page.total,
            page = page.page,
            per_page = page.per_page,
            sort_key = ?input.sort_key,
            "Listed seminars"
        );

        Ok(page)
    }
}
