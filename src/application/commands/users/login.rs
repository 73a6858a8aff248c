// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

/// Argon2id PHC string with the default cost parameters. An unknown e-mail is
/// checked against it so both failure paths spend one hash verification.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.email, &command.password)
            .await?;

        let token = self
            .token_manager
            .issue_default(TokenSubject::from(&user))
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Every failure path yields the same `InvalidCredentials`, so callers
    /// cannot tell an unknown address from a wrong password.
    async fn find_and_authenticate_user(
        &self,
        email: String,
        password: &str,
    ) -> ApplicationResult<User> {
        let email = Email::new(email).map_err(|_| ApplicationError::InvalidCredentials)?;
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            self.password_hasher
                .verify(password, DUMMY_PASSWORD_HASH)
                .await?;
            return Err(ApplicationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::DUMMY_PASSWORD_HASH;
    use argon2::password_hash::PasswordHash;

    #[test]
    fn dummy_hash_goes_through_full_argon2_verification() {
        let parsed = PasswordHash::new(DUMMY_PASSWORD_HASH).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(parsed.hash.is_some());
    }
}
