// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, NewUser, PasswordHash, Role, User},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let name = DisplayName::new(command.name)?;
        let role = match command.role {
            Role::Jobseeker | Role::Employer => command.role,
            Role::Admin => {
                return Err(ApplicationError::permission_denied(
                    "admin accounts cannot be self-registered",
                ));
            }
        };

        self.ensure_email_available(&email).await?;
        let user = self
            .create_and_insert_user(email, &command.password, name, role)
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user.into())
    }

    pub(super) async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }
        Ok(())
    }

    pub(super) async fn create_and_insert_user(
        &self,
        email: Email,
        password: &str,
        name: DisplayName,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(email, password_hash, name, role, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
