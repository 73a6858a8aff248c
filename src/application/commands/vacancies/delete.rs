// src/application/commands/vacancies/delete.rs
use super::VacancyCommandService;
use crate::{
    application::{access::ensure_allowed, dto::AuthenticatedUser, error::ApplicationResult},
    domain::authorization::Action,
};

pub struct DeleteVacancyCommand {
    pub id: i64,
}

impl VacancyCommandService {
    /// Applications to the vacancy go with it in the same store operation.
    pub async fn delete_vacancy(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteVacancyCommand,
    ) -> ApplicationResult<()> {
        let vacancy = self.load(command.id).await?;
        ensure_allowed(&actor.principal(), Action::DeleteVacancy(&vacancy))?;

        let removed = self.vacancy_repo.delete(vacancy.id).await?;

        tracing::info!(
            vacancy_id = %vacancy.id,
            actor_id = %actor.id,
            applications_removed = removed,
            "vacancy deleted"
        );
        Ok(())
    }
}
