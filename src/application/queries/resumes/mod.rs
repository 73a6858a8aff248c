// src/application/queries/resumes/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, ResumeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        resume::{ResumeId, ResumeRepository, ResumeStatus},
    },
};

pub struct ResumeQueryService {
    resume_repo: Arc<dyn ResumeRepository>,
}

#[derive(Debug, Default)]
pub struct ListResumesQuery {
    pub status: Option<ResumeStatus>,
}

impl ResumeQueryService {
    pub fn new(resume_repo: Arc<dyn ResumeRepository>) -> Self {
        Self { resume_repo }
    }

    pub async fn list(&self, query: ListResumesQuery) -> ApplicationResult<Vec<ResumeDto>> {
        let resumes = self.resume_repo.list_all().await?;
        Ok(resumes
            .into_iter()
            .filter(|resume| query.status.is_none_or(|status| resume.status == status))
            .map(Into::into)
            .collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<ResumeDto> {
        let id = ResumeId::new(id)?;
        tracing::debug!(resume_id = %id, "fetching resume");
        self.resume_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing(Resource::Resume))
    }

    pub async fn list_mine(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ResumeDto>> {
        ensure_allowed(&actor.principal(), Action::ListOwnedBy(actor.id))?;
        let resumes = self.resume_repo.list_by_owner(actor.id).await?;
        Ok(resumes.into_iter().map(Into::into).collect())
    }
}
