// src/application/commands/job_applications/update_status.rs
use super::ApplicationCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{ApplicationDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{authorization::Action, job_application::ApplicationStatus},
};

pub struct UpdateApplicationStatusCommand {
    pub id: i64,
    pub status: ApplicationStatus,
}

impl ApplicationCommandService {
    pub async fn update_status(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateApplicationStatusCommand,
    ) -> ApplicationResult<ApplicationDto> {
        let mut application = self.load(command.id).await?;
        let vacancy = self.vacancy_repo.find_by_id(application.vacancy_id).await?;

        ensure_allowed(
            &actor.principal(),
            Action::UpdateApplicationStatus {
                application: &application,
                vacancy: vacancy.as_ref(),
            },
        )?;

        let previous = application.status;
        application.set_status(command.status, self.clock.now());
        let updated = self.application_repo.update_status(&application).await?;

        tracing::info!(
            application_id = %updated.id,
            actor_id = %actor.id,
            from = %previous,
            to = %updated.status,
            "application status changed"
        );
        Ok(updated.into())
    }
}
