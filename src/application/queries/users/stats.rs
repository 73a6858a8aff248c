// src/application/queries/users/stats.rs
use super::UserQueryService;
use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, UserStatsDto},
        error::ApplicationResult,
    },
    domain::{authorization::Action, user::Role},
};

impl UserQueryService {
    pub async fn stats(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserStatsDto> {
        ensure_allowed(&actor.principal(), Action::AdministerUsers)?;

        let total_jobseekers = self.user_repo.count_by_role(Role::Jobseeker).await?;
        let total_employers = self.user_repo.count_by_role(Role::Employer).await?;
        let total_admins = self.user_repo.count_by_role(Role::Admin).await?;
        let total_vacancies = self.vacancy_repo.list_all().await?.len() as u64;
        let total_resumes = self.resume_repo.list_all().await?.len() as u64;
        let total_applications = self.application_repo.count().await?;

        Ok(UserStatsDto {
            total_users: total_jobseekers + total_employers + total_admins,
            total_jobseekers,
            total_employers,
            total_admins,
            total_vacancies,
            total_resumes,
            total_applications,
        })
    }
}
