// src/application/access.rs
use crate::application::error::ApplicationResult;
use crate::domain::authorization::{Action, Decision, Principal, authorize};

/// Run the authorization policy and turn a denial into a typed error.
pub(crate) fn ensure_allowed(principal: &Principal, action: Action<'_>) -> ApplicationResult<()> {
    match authorize(principal, &action) {
        Decision::Allow => Ok(()),
        Decision::Deny(denial) => {
            tracing::warn!(
                user_id = %principal.id,
                role = %principal.role,
                action = action.name(),
                denial = denial.kind(),
                "request denied"
            );
            Err(denial.into())
        }
    }
}
