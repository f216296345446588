//! Resolve Seminar Detail Use Case
//!
//! Decode the access token, verify it, then fetch the seminar. Nothing is
//! fetched unless verification passes.

use std::sync::Arc;

use kernel::id::SeminarId;

use crate::application::config::SeminarConfig;
use crate::domain::entity::seminar::Seminar;
use crate::domain::repository::SeminarRepository;
use crate::domain::value_object::access_token::AccessToken;
use crate::domain::value_object::resolution_stage::ResolutionStage;
use crate::domain::value_object::shared_secret::SharedSecret;
use crate::error::{SeminarError, SeminarResult};

/// Decode and validate a raw token
///
/// Pure: no I/O happens here.
pub fn verify_access_token(raw_token: &str, secret: &SharedSecret) -> SeminarResult<SeminarId> {
    AccessToken::decode(raw_token)?.validate(secret)
}

/// Resolve Seminar Detail Use Case
pub struct ResolveSeminarDetailUseCase<R>
where
    R: SeminarRepository,
{
    seminar_repo: Arc<R>,
    config: Arc<SeminarConfig>,
}

impl<R> ResolveSeminarDetailUseCase<R>
where
    R: SeminarRepository,
{
    pub fn new(seminar_repo: Arc<R>, config: Arc<SeminarConfig>) -> Self {
        Self {
            seminar_repo,
            config,
        }
    }

    pub async fn execute(&self, raw_token: &str) -> SeminarResult<Seminar> {
        let mut stage = ResolutionStage::Idle.advance();

        let token = AccessToken::decode(raw_token).map_err(|e| failed(stage, e))?;
        stage = stage.advance();

        let seminar_id = token
            .validate(&self.config.access_secret)
            .map_err(|e| failed(stage, e))?;
        stage = stage.advance();

        tracing::debug!(seminar_id = %seminar_id, stage = ?stage, "Access token verified");

        let seminar = self
            .seminar_repo
            .find_by_id(seminar_id)
            .await
            .and_then(|found| found.ok_or(SeminarError::NotFound))
            .map_err(|e| failed(stage, e))?;
        stage = stage.advance();

        tracing::info!(seminar_id = %seminar_id, stage = ?stage, "Seminar detail resolved");

        Ok(seminar)
    }
}

fn failed(stage: ResolutionStage, err: SeminarError) -> SeminarError {
    tracing::debug!(
        stage = ?stage,
        next = ?ResolutionStage::Failed,
        error = %err,
        "Seminar detail resolution failed"
    );
    err
}
