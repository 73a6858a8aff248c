// src/application/commands/vacancies/update.rs
use super::VacancyCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, VacancyDto},
        error::ApplicationResult,
    },
    domain::{authorization::Action, vacancy::VacancyChanges},
};

pub struct UpdateVacancyCommand {
    pub id: i64,
    pub changes: VacancyChanges,
}

impl VacancyCommandService {
    pub async fn update_vacancy(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateVacancyCommand,
    ) -> ApplicationResult<VacancyDto> {
        let mut vacancy = self.load(command.id).await?;
        ensure_allowed(&actor.principal(), Action::UpdateVacancy(&vacancy))?;

        vacancy.apply(command.changes, self.clock.now())?;
        let updated = self.vacancy_repo.update(&vacancy).await?;

        tracing::info!(vacancy_id = %updated.id, actor_id = %actor.id, "vacancy updated");
        Ok(updated.into())
    }
}
