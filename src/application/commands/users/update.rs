// src/application/commands/users/update.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        user::{DisplayName, Email, PasswordHash, Role, UserId, UserUpdate},
    },
};

#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub user_id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let principal = actor.principal();
        let target_id = UserId::new(command.user_id)?;
        ensure_allowed(&principal, Action::ManageUser(target_id))?;
        if command.role.is_some() {
            ensure_allowed(&principal, Action::AdministerUsers)?;
        }

        let current = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::User))?;

        let mut update = UserUpdate::new(target_id, self.clock.now());
        if let Some(email) = command.email {
            let email = Email::new(email)?;
            if email != current.email {
                self.ensure_email_available(&email).await?;
                update = update.with_email(email);
            }
        }
        if let Some(name) = command.name {
            update = update.with_name(DisplayName::new(name)?);
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }
        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        if update.is_empty() {
            return Ok(current.into());
        }

        let updated = self.user_repo.update(update).await?;
        tracing::info!(user_id = %updated.id, actor_id = %actor.id, "user updated");
        Ok(updated.into())
    }
}
