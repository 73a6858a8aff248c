// src/application/commands/resumes/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        authorization::Resource,
        resume::{Resume, ResumeId, ResumeRepository},
    },
};

pub struct ResumeCommandService {
    pub(super) resume_repo: Arc<dyn ResumeRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ResumeCommandService {
    pub fn new(resume_repo: Arc<dyn ResumeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { resume_repo, clock }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Resume> {
        let id = ResumeId::new(id)?;
        self.resume_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::Resume))
    }
}
