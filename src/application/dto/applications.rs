// src/application/dto/applications.rs
use crate::domain::job_application::{ApplicationStatus, JobApplication};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ResumeDto;

/// Application as presented to clients. The applicant fields and the embedded
/// resume are filled in for employer views only and are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i64,
    pub user_id: i64,
    pub vacancy_id: i64,
    pub resume_id: i64,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeDto>,
}

impl From<JobApplication> for ApplicationDto {
    fn from(application: JobApplication) -> Self {
        Self {
            id: application.id.into(),
            user_id: application.user_id.into(),
            vacancy_id: application.vacancy_id.into(),
            resume_id: application.resume_id.into(),
            status: application.status,
            created_at: application.created_at,
            updated_at: application.updated_at,
            applicant_name: None,
            applicant_email: None,
            resume: None,
        }
    }
}
