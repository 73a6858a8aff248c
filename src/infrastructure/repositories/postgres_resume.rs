// src/infrastructure/repositories/postgres_resume.rs
use super::error::{expect_affected, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::resume::{NewResume, Resume, ResumeDetails, ResumeId, ResumeRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const RESUME_COLUMNS: &str =
    "id, user_id, title, description, skills, experience, education, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresResumeRepository {
    pool: PgPool,
}

impl PostgresResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResumeRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    skills: Vec<String>,
    experience: String,
    education: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for Resume {
    type Error = DomainError;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(Resume {
            id: ResumeId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            details: ResumeDetails {
                title: row.title,
                description: row.description,
                skills: row.skills,
                experience: row.experience,
                education: row.education,
            },
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ResumeRepository for PostgresResumeRepository {
    async fn insert(&self, resume: NewResume) -> DomainResult<Resume> {
        let NewResume {
            user_id,
            details,
            status,
            created_at,
        } = resume;

        let row = sqlx::query_as::<_, ResumeRow>(&format!(
            "INSERT INTO resumes (user_id, title, description, skills, experience, education,
                 status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {RESUME_COLUMNS}"
        ))
        .bind(i64::from(user_id))
        .bind(details.title)
        .bind(details.description)
        .bind(details.skills)
        .bind(details.experience)
        .bind(details.education)
        .bind(status.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Resume::try_from(row)
    }

    async fn find_by_id(&self, id: ResumeId) -> DomainResult<Option<Resume>> {
        let row = sqlx::query_as::<_, ResumeRow>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Resume::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Resume>> {
        let rows = sqlx::query_as::<_, ResumeRow>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Resume::try_from).collect()
    }

    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<Resume>> {
        let rows = sqlx::query_as::<_, ResumeRow>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE user_id = $1 ORDER BY id"
        ))
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Resume::try_from).collect()
    }

    async fn update(&self, resume: &Resume) -> DomainResult<Resume> {
        let details = &resume.details;
        let row = sqlx::query_as::<_, ResumeRow>(&format!(
            "UPDATE resumes SET
                 title = $2, description = $3, skills = $4, experience = $5,
                 education = $6, status = $7, updated_at = $8
             WHERE id = $1
             RETURNING {RESUME_COLUMNS}"
        ))
        .bind(i64::from(resume.id))
        .bind(&details.title)
        .bind(&details.description)
        .bind(&details.skills)
        .bind(&details.experience)
        .bind(&details.education)
        .bind(resume.status.as_str())
        .bind(resume.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Resume::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("resume not found"))
    }

    async fn delete(&self, id: ResumeId) -> DomainResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query("DELETE FROM applications WHERE resume_id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        // Dropping `tx` on an early return rolls the application delete back.
        expect_affected(result.rows_affected(), "resume")?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed)
    }
}
