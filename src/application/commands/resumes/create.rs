// src/application/commands/resumes/create.rs
use super::ResumeCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, ResumeDto},
        error::ApplicationResult,
    },
    domain::{
        authorization::Action,
        resume::{NewResume, ResumeDetails, ResumeStatus},
    },
};

pub struct CreateResumeCommand {
    pub details: ResumeDetails,
    pub status: Option<ResumeStatus>,
}

impl ResumeCommandService {
    pub async fn create_resume(
        &self,
        actor: &AuthenticatedUser,
        command: CreateResumeCommand,
    ) -> ApplicationResult<ResumeDto> {
        ensure_allowed(&actor.principal(), Action::CreateResume)?;

        let new_resume = NewResume::new(
            actor.id,
            command.details,
            command.status.unwrap_or_default(),
            self.clock.now(),
        )?;
        let created = self.resume_repo.insert(new_resume).await?;

        tracing::info!(resume_id = %created.id, user_id = %actor.id, "resume created");
        Ok(created.into())
    }
}
