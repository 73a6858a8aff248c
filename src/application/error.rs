// src/application/error.rs
use crate::domain::{
    authorization::{Denial, Resource},
    errors::DomainError,
};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("resume does not belong to the applicant")]
    ForeignResume,

    #[error("an application for this vacancy already exists")]
    DuplicateApplication,

    #[error("conflict: {0}")]
    Conflict(String),

    /// Returned for both an unknown e-mail and a wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    TokenExpired,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("storage failure: {0}")]
    Storage(String),

    /// Server-side failure while minting a token; never the caller's fault.
    #[error("token signing failed: {0}")]
    TokenSigning(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        Self::Hashing(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn token_signing(msg: impl Into<String>) -> Self {
        Self::TokenSigning(msg.into())
    }

    pub fn missing(resource: Resource) -> Self {
        Self::NotFound(format!("{resource} not found"))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Persistence(msg) => Self::Storage(msg),
        }
    }
}

impl From<Denial> for ApplicationError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::NotFound(resource) => Self::missing(resource),
            Denial::Forbidden(reason) => Self::PermissionDenied(reason.to_string()),
            Denial::ForeignResume => Self::ForeignResume,
            Denial::DuplicateApplication => Self::DuplicateApplication,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denials_keep_not_found_and_forbidden_apart() {
        assert!(matches!(
            ApplicationError::from(Denial::NotFound(Resource::Vacancy)),
            ApplicationError::NotFound(msg) if msg == "vacancy not found"
        ));
        assert!(matches!(
            ApplicationError::from(Denial::Forbidden("nope")),
            ApplicationError::PermissionDenied(_)
        ));
        assert!(matches!(
            ApplicationError::from(Denial::DuplicateApplication),
            ApplicationError::DuplicateApplication
        ));
    }

    #[test]
    fn persistence_errors_become_storage_errors() {
        let err = ApplicationError::from(DomainError::persistence("connection reset"));
        assert!(matches!(err, ApplicationError::Storage(_)));
    }
}
