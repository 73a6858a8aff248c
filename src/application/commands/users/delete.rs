// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        user::UserId,
    },
};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Administrative removal of an account. The store removes whatever the
    /// user owns along with it.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_allowed(&actor.principal(), Action::AdministerUsers)?;
        let id = UserId::new(command.user_id)?;
        if id == actor.id {
            return Err(ApplicationError::validation(
                "administrators cannot delete their own account",
            ));
        }

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::User))?;
        self.user_repo.delete(id).await?;

        tracing::info!(user_id = %id, actor_id = %actor.id, "user deleted");
        Ok(())
    }
}
