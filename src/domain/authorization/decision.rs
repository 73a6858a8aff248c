// src/domain/authorization/decision.rs
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Vacancy,
    Resume,
    Application,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Vacancy => "vacancy",
            Resource::Resume => "resume",
            Resource::Application => "application",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request was refused. "Not found" and "forbidden" are kept apart so
/// the boundary can answer them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("permission denied: {0}")]
    Forbidden(&'static str),
    #[error("resume does not belong to the applicant")]
    ForeignResume,
    #[error("an application for this vacancy already exists")]
    DuplicateApplication,
}

impl Denial {
    /// Short machine-friendly tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Denial::NotFound(_) => "not_found",
            Denial::Forbidden(_) => "forbidden",
            Denial::ForeignResume => "foreign_resume",
            Denial::DuplicateApplication => "duplicate_application",
        }
    }
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

impl Decision {
    pub fn forbidden(reason: &'static str) -> Self {
        Decision::Deny(Denial::Forbidden(reason))
    }

    pub fn not_found(resource: Resource) -> Self {
        Decision::Deny(Denial::NotFound(resource))
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(denial) => Err(denial),
        }
    }
}
