// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            job_applications::ApplicationCommandService, resumes::ResumeCommandService,
            users::UserCommandService, vacancies::VacancyCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            job_applications::ApplicationQueryService, resumes::ResumeQueryService,
            users::UserQueryService, vacancies::VacancyQueryService,
        },
    },
    domain::{
        authorization::Principal, job_application::ApplicationRepository,
        resume::ResumeRepository, user::UserRepository, vacancy::VacancyRepository,
    },
};

/// The storage backends the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub vacancies: Arc<dyn VacancyRepository>,
    pub resumes: Arc<dyn ResumeRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub vacancy_commands: Arc<VacancyCommandService>,
    pub vacancy_queries: Arc<VacancyQueryService>,
    pub resume_commands: Arc<ResumeCommandService>,
    pub resume_queries: Arc<ResumeQueryService>,
    pub application_commands: Arc<ApplicationCommandService>,
    pub application_queries: Arc<ApplicationQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.vacancies),
            Arc::clone(&repos.resumes),
            Arc::clone(&repos.applications),
        ));

        let vacancy_commands = Arc::new(VacancyCommandService::new(
            Arc::clone(&repos.vacancies),
            Arc::clone(&clock),
        ));
        let vacancy_queries = Arc::new(VacancyQueryService::new(Arc::clone(&repos.vacancies)));

        let resume_commands = Arc::new(ResumeCommandService::new(
            Arc::clone(&repos.resumes),
            Arc::clone(&clock),
        ));
        let resume_queries = Arc::new(ResumeQueryService::new(Arc::clone(&repos.resumes)));

        let application_commands = Arc::new(ApplicationCommandService::new(
            Arc::clone(&repos.applications),
            Arc::clone(&repos.vacancies),
            Arc::clone(&repos.resumes),
            Arc::clone(&clock),
        ));
        let application_queries = Arc::new(ApplicationQueryService::new(
            repos.applications,
            repos.vacancies,
            repos.resumes,
            repos.users,
        ));

        Self {
            user_commands,
            user_queries,
            vacancy_commands,
            vacancy_queries,
            resume_commands,
            resume_queries,
            application_commands,
            application_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verify a bearer token and return the identity it carries.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }

    /// Verify a bearer token and reduce it to the principal the
    /// authorization policy works with.
    pub async fn validate(&self, token: &str) -> ApplicationResult<Principal> {
        Ok(self.authenticate(token).await?.principal())
    }
}
