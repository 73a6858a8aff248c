// src/infrastructure/repositories/postgres_application.rs
use super::error::{expect_affected, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job_application::{
    ApplicationId, ApplicationRepository, JobApplication, NewJobApplication,
};
use crate::domain::resume::ResumeId;
use crate::domain::user::UserId;
use crate::domain::vacancy::VacancyId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const APPLICATION_COLUMNS: &str =
    "id, user_id, vacancy_id, resume_id, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_where(&self, column: &str, id: i64) -> DomainResult<Vec<JobApplication>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE {column} = $1 ORDER BY id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(JobApplication::try_from).collect()
    }

    async fn delete_where(&self, column: &str, id: i64) -> DomainResult<u64> {
        sqlx::query(&format!("DELETE FROM applications WHERE {column} = $1"))
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(map_sqlx)
    }
}

#[derive(Debug, FromRow)]
struct ApplicationRow {
    id: i64,
    user_id: i64,
    vacancy_id: i64,
    resume_id: i64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for JobApplication {
    type Error = DomainError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        Ok(JobApplication {
            id: ApplicationId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            vacancy_id: VacancyId::new(row.vacancy_id)?,
            resume_id: ResumeId::new(row.resume_id)?,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn insert(&self, application: NewJobApplication) -> DomainResult<JobApplication> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "INSERT INTO applications (user_id, vacancy_id, resume_id, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(i64::from(application.user_id))
        .bind(i64::from(application.vacancy_id))
        .bind(i64::from(application.resume_id))
        .bind(application.status.as_str())
        .bind(application.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        JobApplication::try_from(row)
    }

    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplication>> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(JobApplication::try_from).transpose()
    }

    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<JobApplication>> {
        self.list_where("user_id", i64::from(user_id)).await
    }

    async fn list_by_vacancy(&self, vacancy_id: VacancyId) -> DomainResult<Vec<JobApplication>> {
        self.list_where("vacancy_id", i64::from(vacancy_id)).await
    }

    async fn update_status(&self, application: &JobApplication) -> DomainResult<JobApplication> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "UPDATE applications SET status = $2, updated_at = $3
             WHERE id = $1
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(i64::from(application.id))
        .bind(application.status.as_str())
        .bind(application.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(JobApplication::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("application not found"))
    }

    async fn delete(&self, id: ApplicationId) -> DomainResult<()> {
        let removed = self.delete_where("id", i64::from(id)).await?;
        expect_affected(removed, "application")
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM applications")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }
}
