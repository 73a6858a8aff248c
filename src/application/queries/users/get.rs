// src/application/queries/users/get.rs
use super::UserQueryService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        user::UserId,
    },
};

impl UserQueryService {
    /// Look up a single account. The permission check runs before the
    /// lookup, so a non-admin learns nothing about ids other than their own.
    pub async fn get_user(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<UserDto> {
        let id = UserId::new(id)?;
        ensure_allowed(&actor.principal(), Action::ManageUser(id))?;

        tracing::debug!(user_id = %id, actor_id = %actor.id, "fetching user");
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::User))?;

        Ok(user.into())
    }
}
