// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::authorization::Resource,
};

impl UserQueryService {
    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::User))?;

        Ok(user.into())
    }
}
