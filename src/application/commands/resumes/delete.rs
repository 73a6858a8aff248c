// src/application/commands/resumes/delete.rs
use super::ResumeCommandService;
use crate::{
    application::{access::ensure_allowed, dto::AuthenticatedUser, error::ApplicationResult},
    domain::authorization::Action,
};

pub struct DeleteResumeCommand {
    pub id: i64,
}

impl ResumeCommandService {
    /// The resume and its applications are removed by the store in one step;
    /// on failure both stay in place.
    pub async fn delete_resume(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteResumeCommand,
    ) -> ApplicationResult<()> {
        let resume = self.load(command.id).await?;
        ensure_allowed(&actor.principal(), Action::DeleteResume(&resume))?;

        let removed = match self.resume_repo.delete(resume.id).await {
            Ok(removed) => removed,
            Err(err) => {
                tracing::error!(resume_id = %resume.id, error = %err, "failed to delete resume");
                return Err(err.into());
            }
        };

        tracing::info!(
            resume_id = %resume.id,
            actor_id = %actor.id,
            applications_removed = removed,
            "resume deleted"
        );
        Ok(())
    }
}
