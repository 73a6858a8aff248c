// src/application/commands/resumes/update.rs
use super::ResumeCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, ResumeDto},
        error::ApplicationResult,
    },
    domain::{authorization::Action, resume::ResumeChanges},
};

pub struct UpdateResumeCommand {
    pub id: i64,
    pub changes: ResumeChanges,
}

impl ResumeCommandService {
    pub async fn update_resume(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateResumeCommand,
    ) -> ApplicationResult<ResumeDto> {
        let mut resume = self.load(command.id).await?;
        ensure_allowed(&actor.principal(), Action::UpdateResume(&resume))?;

        resume.apply(command.changes, self.clock.now())?;
        let updated = self.resume_repo.update(&resume).await?;

        tracing::info!(resume_id = %updated.id, actor_id = %actor.id, "resume updated");
        Ok(updated.into())
    }
}
