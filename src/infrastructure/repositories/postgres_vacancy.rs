// src/infrastructure/repositories/postgres_vacancy.rs
use super::error::{expect_affected, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::vacancy::{NewVacancy, Vacancy, VacancyDetails, VacancyId, VacancyRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const VACANCY_COLUMNS: &str = "id, employer_id, title, description, requirements, responsibilities, \
     salary, location, employment_type, company, skills, education, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresVacancyRepository {
    pool: PgPool,
}

impl PostgresVacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VacancyRow {
    id: i64,
    employer_id: i64,
    title: String,
    description: String,
    requirements: String,
    responsibilities: String,
    salary: Option<i64>,
    location: String,
    employment_type: String,
    company: String,
    skills: Vec<String>,
    education: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VacancyRow> for Vacancy {
    type Error = DomainError;

    fn try_from(row: VacancyRow) -> Result<Self, Self::Error> {
        Ok(Vacancy {
            id: VacancyId::new(row.id)?,
            employer_id: UserId::new(row.employer_id)?,
            details: VacancyDetails {
                title: row.title,
                description: row.description,
                requirements: row.requirements,
                responsibilities: row.responsibilities,
                salary: row.salary,
                location: row.location,
                employment_type: row.employment_type,
                company: row.company,
                skills: row.skills,
                education: row.education,
            },
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl VacancyRepository for PostgresVacancyRepository {
    async fn insert(&self, vacancy: NewVacancy) -> DomainResult<Vacancy> {
        let NewVacancy {
            employer_id,
            details,
            status,
            created_at,
        } = vacancy;

        let row = sqlx::query_as::<_, VacancyRow>(&format!(
            "INSERT INTO vacancies (employer_id, title, description, requirements, responsibilities,
                 salary, location, employment_type, company, skills, education, status,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
             RETURNING {VACANCY_COLUMNS}"
        ))
        .bind(i64::from(employer_id))
        .bind(details.title)
        .bind(details.description)
        .bind(details.requirements)
        .bind(details.responsibilities)
        .bind(details.salary)
        .bind(details.location)
        .bind(details.employment_type)
        .bind(details.company)
        .bind(details.skills)
        .bind(details.education)
        .bind(status.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Vacancy::try_from(row)
    }

    async fn find_by_id(&self, id: VacancyId) -> DomainResult<Option<Vacancy>> {
        let row = sqlx::query_as::<_, VacancyRow>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Vacancy>> {
        let rows = sqlx::query_as::<_, VacancyRow>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Vacancy::try_from).collect()
    }

    async fn list_by_owner(&self, employer_id: UserId) -> DomainResult<Vec<Vacancy>> {
        let rows = sqlx::query_as::<_, VacancyRow>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE employer_id = $1 ORDER BY id"
        ))
        .bind(i64::from(employer_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Vacancy::try_from).collect()
    }

    async fn update(&self, vacancy: &Vacancy) -> DomainResult<Vacancy> {
        let details = &vacancy.details;
        let row = sqlx::query_as::<_, VacancyRow>(&format!(
            "UPDATE vacancies SET
                 title = $2, description = $3, requirements = $4, responsibilities = $5,
                 salary = $6, location = $7, employment_type = $8, company = $9,
                 skills = $10, education = $11, status = $12, updated_at = $13
             WHERE id = $1
             RETURNING {VACANCY_COLUMNS}"
        ))
        .bind(i64::from(vacancy.id))
        .bind(&details.title)
        .bind(&details.description)
        .bind(&details.requirements)
        .bind(&details.responsibilities)
        .bind(details.salary)
        .bind(&details.location)
        .bind(&details.employment_type)
        .bind(&details.company)
        .bind(&details.skills)
        .bind(&details.education)
        .bind(vacancy.status.as_str())
        .bind(vacancy.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Vacancy::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("vacancy not found"))
    }

    async fn delete(&self, id: VacancyId) -> DomainResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query("DELETE FROM applications WHERE vacancy_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        // Dropping `tx` on an early return rolls the application delete back.
        expect_affected(result.rows_affected(), "vacancy")?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed)
    }
}
