// src/domain/job_application/entity.rs
use crate::domain::job_application::value_objects::{ApplicationId, ApplicationStatus};
use crate::domain::resume::ResumeId;
use crate::domain::user::UserId;
use crate::domain::vacancy::VacancyId;
use chrono::{DateTime, Utc};

/// A jobseeker's application to a vacancy, backed by one of their resumes.
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub vacancy_id: VacancyId,
    pub resume_id: ResumeId,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn set_status(&mut self, status: ApplicationStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub user_id: UserId,
    pub vacancy_id: VacancyId,
    pub resume_id: ResumeId,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl NewJobApplication {
    pub fn pending(
        user_id: UserId,
        vacancy_id: VacancyId,
        resume_id: ResumeId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            vacancy_id,
            resume_id,
            status: ApplicationStatus::Pending,
            created_at,
        }
    }
}
