// src/application/commands/job_applications/create.rs
use super::ApplicationCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{ApplicationDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::Action,
        errors::DomainError,
        job_application::NewJobApplication,
        resume::ResumeId,
        vacancy::VacancyId,
    },
};

pub struct CreateApplicationCommand {
    pub vacancy_id: i64,
    pub resume_id: i64,
}

impl ApplicationCommandService {
    /// Apply to a vacancy with one of the caller's own resumes. At most one
    /// application exists per (user, vacancy) pair regardless of the resume.
    pub async fn create_application(
        &self,
        actor: &AuthenticatedUser,
        command: CreateApplicationCommand,
    ) -> ApplicationResult<ApplicationDto> {
        let vacancy_id = VacancyId::new(command.vacancy_id)?;
        let resume_id = ResumeId::new(command.resume_id)?;

        let vacancy = self.vacancy_repo.find_by_id(vacancy_id).await?;
        let resume = self.resume_repo.find_by_id(resume_id).await?;
        let existing = self.application_repo.list_by_owner(actor.id).await?;

        ensure_allowed(
            &actor.principal(),
            Action::CreateApplication {
                vacancy: vacancy.as_ref(),
                resume: resume.as_ref(),
                existing: &existing,
            },
        )?;

        let new_application =
            NewJobApplication::pending(actor.id, vacancy_id, resume_id, self.clock.now());
        // A concurrent request may have won the race since the check above.
        let created = self
            .application_repo
            .insert(new_application)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::DuplicateApplication,
                other => other.into(),
            })?;

        tracing::info!(
            application_id = %created.id,
            user_id = %actor.id,
            vacancy_id = %vacancy_id,
            "application submitted"
        );
        Ok(created.into())
    }
}
