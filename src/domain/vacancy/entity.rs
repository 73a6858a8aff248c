// src/domain/vacancy/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::vacancy::value_objects::{VacancyDetails, VacancyId, VacancyStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Vacancy {
    pub id: VacancyId,
    pub employer_id: UserId,
    pub details: VacancyDetails,
    pub status: VacancyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vacancy {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.employer_id == user_id
    }

    pub fn apply(&mut self, changes: VacancyChanges, now: DateTime<Utc>) -> DomainResult<()> {
        let mut details = self.details.clone();
        let VacancyChanges {
            title,
            description,
            requirements,
            responsibilities,
            salary,
            location,
            employment_type,
            company,
            skills,
            education,
            status,
        } = changes;

        if let Some(title) = title {
            details.title = title;
        }
        if let Some(description) = description {
            details.description = description;
        }
        if let Some(requirements) = requirements {
            details.requirements = requirements;
        }
        if let Some(responsibilities) = responsibilities {
            details.responsibilities = responsibilities;
        }
        if let Some(salary) = salary {
            details.salary = salary;
        }
        if let Some(location) = location {
            details.location = location;
        }
        if let Some(employment_type) = employment_type {
            details.employment_type = employment_type;
        }
        if let Some(company) = company {
            details.company = company;
        }
        if let Some(skills) = skills {
            details.skills = skills;
        }
        if let Some(education) = education {
            details.education = education;
        }
        details.validate()?;

        self.details = details;
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewVacancy {
    pub employer_id: UserId,
    pub details: VacancyDetails,
    pub status: VacancyStatus,
    pub created_at: DateTime<Utc>,
}

impl NewVacancy {
    pub fn new(
        employer_id: UserId,
        details: VacancyDetails,
        status: VacancyStatus,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        details.validate()?;
        Ok(Self {
            employer_id,
            details,
            status,
            created_at,
        })
    }
}

/// Partial edit of a vacancy. `salary` is doubly optional so a caller can
/// clear it (`Some(None)`) as well as leave it untouched (`None`).
#[derive(Debug, Clone, Default)]
pub struct VacancyChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub salary: Option<Option<i64>>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub company: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub status: Option<VacancyStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vacancy {
        let now = Utc::now();
        Vacancy {
            id: VacancyId::new(1).unwrap(),
            employer_id: UserId::new(10).unwrap(),
            details: VacancyDetails {
                title: "Backend developer".into(),
                salary: Some(100),
                ..VacancyDetails::default()
            },
            status: VacancyStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn apply_changes_only_touches_given_fields() {
        let mut vacancy = sample();
        let later = vacancy.created_at + chrono::Duration::minutes(5);
        vacancy
            .apply(
                VacancyChanges {
                    location: Some("Berlin".into()),
                    salary: Some(None),
                    status: Some(VacancyStatus::Closed),
                    ..VacancyChanges::default()
                },
                later,
            )
            .unwrap();

        assert_eq!(vacancy.details.title, "Backend developer");
        assert_eq!(vacancy.details.location, "Berlin");
        assert_eq!(vacancy.details.salary, None);
        assert_eq!(vacancy.status, VacancyStatus::Closed);
        assert_eq!(vacancy.updated_at, later);
    }

    #[test]
    fn invalid_changes_leave_vacancy_untouched() {
        let mut vacancy = sample();
        let before = vacancy.details.clone();
        let result = vacancy.apply(
            VacancyChanges {
                title: Some(String::new()),
                status: Some(VacancyStatus::Closed),
                ..VacancyChanges::default()
            },
            Utc::now(),
        );

        assert!(result.is_err());
        assert_eq!(vacancy.details, before);
        assert_eq!(vacancy.status, VacancyStatus::Active);
    }
}
