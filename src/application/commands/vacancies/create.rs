// src/application/commands/vacancies/create.rs
use super::VacancyCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, VacancyDto},
        error::ApplicationResult,
    },
    domain::{
        authorization::Action,
        vacancy::{NewVacancy, VacancyDetails, VacancyStatus},
    },
};

pub struct CreateVacancyCommand {
    pub details: VacancyDetails,
    pub status: Option<VacancyStatus>,
}

impl VacancyCommandService {
    pub async fn create_vacancy(
        &self,
        actor: &AuthenticatedUser,
        command: CreateVacancyCommand,
    ) -> ApplicationResult<VacancyDto> {
        ensure_allowed(&actor.principal(), Action::CreateVacancy)?;

        let new_vacancy = NewVacancy::new(
            actor.id,
            command.details,
            command.status.unwrap_or_default(),
            self.clock.now(),
        )?;
        let created = self.vacancy_repo.insert(new_vacancy).await?;

        tracing::info!(vacancy_id = %created.id, employer_id = %actor.id, "vacancy created");
        Ok(created.into())
    }
}
