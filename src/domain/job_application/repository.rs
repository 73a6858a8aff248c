// src/domain/job_application/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::job_application::{
    entity::{JobApplication, NewJobApplication},
    value_objects::ApplicationId,
};
use crate::domain::user::UserId;
use crate::domain::vacancy::VacancyId;
use async_trait::async_trait;

/// Application store. `insert` must reject a second application for the same
/// (user, vacancy) pair with `DomainError::Conflict`; that is the backstop
/// behind the advisory check done by the authorization policy.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn insert(&self, application: NewJobApplication) -> DomainResult<JobApplication>;
    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplication>>;
    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<JobApplication>>;
    async fn list_by_vacancy(&self, vacancy_id: VacancyId) -> DomainResult<Vec<JobApplication>>;
    async fn update_status(&self, application: &JobApplication) -> DomainResult<JobApplication>;
    async fn delete(&self, id: ApplicationId) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
}
