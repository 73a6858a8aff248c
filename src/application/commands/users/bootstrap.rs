// src/application/commands/users/bootstrap.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{DisplayName, Email, Role},
};

pub struct EnsureAdminCommand {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl UserCommandService {
    /// Create the configured administrator account unless one with that
    /// e-mail already exists. Admins cannot self-register, so this is the
    /// only way the first one comes into being.
    pub async fn ensure_admin(&self, command: EnsureAdminCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            if existing.role != Role::Admin {
                tracing::warn!(user_id = %existing.id, "bootstrap admin e-mail belongs to a non-admin account");
            }
            return Ok(existing.into());
        }

        validate_password(&command.password)?;
        let name = DisplayName::new(command.name)?;
        let user = self
            .create_and_insert_user(email, &command.password, name, Role::Admin)
            .await?;

        tracing::info!(user_id = %user.id, "bootstrap administrator created");
        Ok(user.into())
    }
}
