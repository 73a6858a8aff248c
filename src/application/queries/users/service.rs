// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::domain::{
    job_application::ApplicationRepository, resume::ResumeRepository, user::UserRepository,
    vacancy::VacancyRepository,
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) vacancy_repo: Arc<dyn VacancyRepository>,
    pub(super) resume_repo: Arc<dyn ResumeRepository>,
    pub(super) application_repo: Arc<dyn ApplicationRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        vacancy_repo: Arc<dyn VacancyRepository>,
        resume_repo: Arc<dyn ResumeRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            user_repo,
            vacancy_repo,
            resume_repo,
            application_repo,
        }
    }
}
