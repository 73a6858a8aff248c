// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::{authorization::Action, user::Role},
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub role: Option<Role>,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<Vec<UserDto>> {
        ensure_allowed(&actor.principal(), Action::AdministerUsers)?;

        let users = self.user_repo.list_all().await?;
        Ok(users
            .into_iter()
            .filter(|user| query.role.is_none_or(|role| user.role == role))
            .map(Into::into)
            .collect())
    }
}
