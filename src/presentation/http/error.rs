// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "an internal error occurred";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::PermissionDenied(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            err @ ApplicationError::ForeignResume => {
                Self::new(StatusCode::FORBIDDEN, err.to_string())
            }
            err @ ApplicationError::DuplicateApplication => {
                Self::new(StatusCode::CONFLICT, err.to_string())
            }
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            err @ ApplicationError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            ApplicationError::InvalidToken(detail) => {
                tracing::debug!(%detail, "bearer token rejected");
                Self::new(StatusCode::UNAUTHORIZED, "invalid token".into())
            }
            err @ ApplicationError::TokenExpired => {
                Self::new(StatusCode::UNAUTHORIZED, err.to_string())
            }
            err @ (ApplicationError::Hashing(_)
            | ApplicationError::Storage(_)
            | ApplicationError::TokenSigning(_)) => {
                tracing::error!(error = %err, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every error response produced by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn error_kinds_map_to_statuses() {
        assert_eq!(status_of(ApplicationError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApplicationError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ApplicationError::permission_denied("x")), StatusCode::FORBIDDEN);
        assert_eq!(status_of(ApplicationError::ForeignResume), StatusCode::FORBIDDEN);
        assert_eq!(status_of(ApplicationError::DuplicateApplication), StatusCode::CONFLICT);
        assert_eq!(status_of(ApplicationError::conflict("x")), StatusCode::CONFLICT);
        assert_eq!(status_of(ApplicationError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApplicationError::invalid_token("x")), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApplicationError::TokenExpired), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApplicationError::storage("x")), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of(ApplicationError::hashing("x")), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            status_of(ApplicationError::token_signing("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = HttpError::from_error(ApplicationError::storage("password=hunter2 at db01"));
        assert_eq!(err.message, INTERNAL_MESSAGE);
    }
}
