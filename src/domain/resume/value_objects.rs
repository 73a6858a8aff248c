// src/domain/resume/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResumeId(pub i64);

impl ResumeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("resume id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ResumeId> for i64 {
    fn from(value: ResumeId) -> Self {
        value.0
    }
}

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl ResumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::Active => "active",
            ResumeStatus::Draft => "draft",
            ResumeStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ResumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ResumeStatus::Active),
            "draft" => Ok(ResumeStatus::Draft),
            "archived" => Ok(ResumeStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown resume status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeDetails {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
}

impl ResumeDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("resume title cannot be empty"));
        }
        if self.skills.iter().any(|skill| skill.trim().is_empty()) {
            return Err(DomainError::validation("skills cannot contain blank entries"));
        }
        Ok(())
    }
}
