// src/domain/resume/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::resume::value_objects::{ResumeDetails, ResumeId, ResumeStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Resume {
    pub id: ResumeId,
    pub user_id: UserId,
    pub details: ResumeDetails,
    pub status: ResumeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn apply(&mut self, changes: ResumeChanges, now: DateTime<Utc>) -> DomainResult<()> {
        let mut details = self.details.clone();
        if let Some(title) = changes.title {
            details.title = title;
        }
        if let Some(description) = changes.description {
            details.description = description;
        }
        if let Some(skills) = changes.skills {
            details.skills = skills;
        }
        if let Some(experience) = changes.experience {
            details.experience = experience;
        }
        if let Some(education) = changes.education {
            details.education = education;
        }
        details.validate()?;

        self.details = details;
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: UserId,
    pub details: ResumeDetails,
    pub status: ResumeStatus,
    pub created_at: DateTime<Utc>,
}

impl NewResume {
    pub fn new(
        user_id: UserId,
        details: ResumeDetails,
        status: ResumeStatus,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        details.validate()?;
        Ok(Self {
            user_id,
            details,
            status,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResumeChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub status: Option<ResumeStatus>,
}
