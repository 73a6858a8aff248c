// src/application/commands/job_applications/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        authorization::Resource,
        job_application::{ApplicationId, ApplicationRepository, JobApplication},
        resume::ResumeRepository,
        vacancy::VacancyRepository,
    },
};

pub struct ApplicationCommandService {
    pub(super) application_repo: Arc<dyn ApplicationRepository>,
    pub(super) vacancy_repo: Arc<dyn VacancyRepository>,
    pub(super) resume_repo: Arc<dyn ResumeRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ApplicationCommandService {
    pub fn new(
        application_repo: Arc<dyn ApplicationRepository>,
        vacancy_repo: Arc<dyn VacancyRepository>,
        resume_repo: Arc<dyn ResumeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            application_repo,
            vacancy_repo,
            resume_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<JobApplication> {
        let id = ApplicationId::new(id)?;
        self.application_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::Application))
    }
}
