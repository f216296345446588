//! Repository Traits
//!
//! Read-only access to seminar records. The implementation lives in the
//! infrastructure layer and talks to the remote seminar API.

use kernel::id::SeminarId;

use crate::domain::entity::seminar::Seminar;
use crate::error::SeminarResult;

/// Seminar repository trait
#[trait_variant::make(SeminarRepository: Send)]
pub trait LocalSeminarRepository {
    /// Find a seminar by id
    ///
    /// `Ok(None)` when the service reports no such record.
    async fn find_by_id(&self, seminar_id: SeminarId) -> SeminarResult<Option<Seminar>>;

    /// List seminars visible to the holder of `bearer_token`
    async fn list(&self, bearer_token: &str) -> SeminarResult<Vec<Seminar>>;
}
