// src/application/dto/resumes.rs
use crate::domain::resume::{Resume, ResumeStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub status: ResumeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resume> for ResumeDto {
    fn from(resume: Resume) -> Self {
        let details = resume.details;
        Self {
            id: resume.id.into(),
            user_id: resume.user_id.into(),
            title: details.title,
            description: details.description,
            skills: details.skills,
            experience: details.experience,
            education: details.education,
            status: resume.status,
            created_at: resume.created_at,
            updated_at: resume.updated_at,
        }
    }
}
