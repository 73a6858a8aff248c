// src/application/commands/job_applications/delete.rs
use super::ApplicationCommandService;
use crate::{
    application::{access::ensure_allowed, dto::AuthenticatedUser, error::ApplicationResult},
    domain::authorization::Action,
};

pub struct DeleteApplicationCommand {
    pub id: i64,
}

impl ApplicationCommandService {
    pub async fn withdraw_application(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteApplicationCommand,
    ) -> ApplicationResult<()> {
        let application = self.load(command.id).await?;
        ensure_allowed(&actor.principal(), Action::DeleteApplication(&application))?;

        self.application_repo.delete(application.id).await?;
        tracing::info!(application_id = %application.id, actor_id = %actor.id, "application withdrawn");
        Ok(())
    }
}
