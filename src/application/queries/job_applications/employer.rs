// src/application/queries/job_applications/employer.rs
use super::ApplicationQueryService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{ApplicationDto, AuthenticatedUser, ResumeDto},
        error::ApplicationResult,
    },
    domain::{authorization::Action, job_application::JobApplication},
};

impl ApplicationQueryService {
    /// Every application to any vacancy the caller owns, each with the
    /// applicant's name, e-mail and the submitted resume attached.
    pub async fn list_for_employer(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ApplicationDto>> {
        ensure_allowed(&actor.principal(), Action::ListOwnedBy(actor.id))?;

        let mut applications = Vec::new();
        for vacancy in self.vacancy_repo.list_by_owner(actor.id).await? {
            applications.extend(self.application_repo.list_by_vacancy(vacancy.id).await?);
        }
        applications.sort_by_key(|application| application.id);

        self.enrich(applications).await
    }

    /// Missing applicants or resumes leave the corresponding fields empty
    /// instead of failing the whole listing.
    pub(super) async fn enrich(
        &self,
        applications: Vec<JobApplication>,
    ) -> ApplicationResult<Vec<ApplicationDto>> {
        let mut enriched = Vec::with_capacity(applications.len());
        for application in applications {
            let applicant = self.user_repo.find_by_id(application.user_id).await?;
            let resume = self.resume_repo.find_by_id(application.resume_id).await?;

            let mut dto = ApplicationDto::from(application);
            if let Some(applicant) = applicant {
                dto.applicant_name = Some(applicant.name.into());
                dto.applicant_email = Some(applicant.email.into());
            }
            dto.resume = resume.map(ResumeDto::from);
            enriched.push(dto);
        }
        Ok(enriched)
    }
}
