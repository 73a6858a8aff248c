// src/application/dto/vacancies.rs
use crate::domain::vacancy::{Vacancy, VacancyStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyDto {
    pub id: i64,
    pub employer_id: i64,
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
    pub status: VacancyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vacancy> for VacancyDto {
    fn from(vacancy: Vacancy) -> Self {
        let details = vacancy.details;
        Self {
            id: vacancy.id.into(),
            employer_id: vacancy.employer_id.into(),
            title: details.title,
            description: details.description,
            requirements: details.requirements,
            responsibilities: details.responsibilities,
            salary: details.salary,
            location: details.location,
            employment_type: details.employment_type,
            company: details.company,
            skills: details.skills,
            education: details.education,
            status: vacancy.status,
            created_at: vacancy.created_at,
            updated_at: vacancy.updated_at,
        }
    }
}
