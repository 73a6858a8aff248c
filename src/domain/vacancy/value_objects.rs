// src/domain/vacancy/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VacancyId(pub i64);

impl VacancyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("vacancy id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VacancyId> for i64 {
    fn from(value: VacancyId) -> Self {
        value.0
    }
}

impl fmt::Display for VacancyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl VacancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacancyStatus::Active => "active",
            VacancyStatus::Closed => "closed",
            VacancyStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for VacancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacancyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VacancyStatus::Active),
            "closed" => Ok(VacancyStatus::Closed),
            "draft" => Ok(VacancyStatus::Draft),
            other => Err(DomainError::Validation(format!(
                "unknown vacancy status '{other}'"
            ))),
        }
    }
}

/// Descriptive part of a vacancy, everything the owner may edit except status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VacancyDetails {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub salary: Option<i64>,
    pub location: String,
    pub employment_type: String,
    pub company: String,
    pub skills: Vec<String>,
    pub education: String,
}

impl VacancyDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("vacancy title cannot be empty"));
        }
        if self.salary.is_some_and(|salary| salary < 0) {
            return Err(DomainError::validation("salary cannot be negative"));
        }
        if self.skills.iter().any(|skill| skill.trim().is_empty()) {
            return Err(DomainError::validation("skills cannot contain blank entries"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_require_title_and_sane_salary() {
        let mut details = VacancyDetails {
            title: "Rust engineer".into(),
            salary: Some(5000),
            ..VacancyDetails::default()
        };
        assert!(details.validate().is_ok());

        details.salary = Some(-1);
        assert!(details.validate().is_err());

        details.salary = None;
        details.title = "  ".into();
        assert!(details.validate().is_err());
    }

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!("closed".parse::<VacancyStatus>().unwrap(), VacancyStatus::Closed);
        assert!("archived".parse::<VacancyStatus>().is_err());
    }
}
