// src/application/queries/job_applications/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::ensure_allowed,
        dto::{ApplicationDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        job_application::{ApplicationId, ApplicationRepository},
        resume::ResumeRepository,
        user::UserRepository,
        vacancy::{VacancyId, VacancyRepository},
    },
};

pub struct ApplicationQueryService {
    pub(super) application_repo: Arc<dyn ApplicationRepository>,
    pub(super) vacancy_repo: Arc<dyn VacancyRepository>,
    pub(super) resume_repo: Arc<dyn ResumeRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ApplicationQueryService {
    pub fn new(
        application_repo: Arc<dyn ApplicationRepository>,
        vacancy_repo: Arc<dyn VacancyRepository>,
        resume_repo: Arc<dyn ResumeRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            application_repo,
            vacancy_repo,
            resume_repo,
            user_repo,
        }
    }

    pub async fn get(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<ApplicationDto> {
        let id = ApplicationId::new(id)?;
        let application = self
            .application_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::Application))?;
        let vacancy = self.vacancy_repo.find_by_id(application.vacancy_id).await?;

        ensure_allowed(
            &actor.principal(),
            Action::ViewApplication {
                application: &application,
                vacancy: vacancy.as_ref(),
            },
        )?;
        Ok(application.into())
    }

    pub async fn list_mine(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ApplicationDto>> {
        ensure_allowed(&actor.principal(), Action::ListOwnedBy(actor.id))?;
        let applications = self.application_repo.list_by_owner(actor.id).await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    pub async fn list_for_vacancy(
        &self,
        actor: &AuthenticatedUser,
        vacancy_id: i64,
    ) -> ApplicationResult<Vec<ApplicationDto>> {
        let vacancy_id = VacancyId::new(vacancy_id)?;
        let vacancy = self
            .vacancy_repo
            .find_by_id(vacancy_id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::Vacancy))?;
        ensure_allowed(&actor.principal(), Action::ListVacancyApplications(&vacancy))?;

        let applications = self.application_repo.list_by_vacancy(vacancy.id).await?;
        self.enrich(applications).await
    }
}
