// src/domain/resume/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::resume::{
    entity::{NewResume, Resume},
    value_objects::ResumeId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn insert(&self, resume: NewResume) -> DomainResult<Resume>;
    async fn find_by_id(&self, id: ResumeId) -> DomainResult<Option<Resume>>;
    async fn list_all(&self) -> DomainResult<Vec<Resume>>;
    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<Resume>>;
    async fn update(&self, resume: &Resume) -> DomainResult<Resume>;
    /// Remove the resume and every application referencing it as one unit.
    /// Either both go or neither does. Returns the number of applications removed.
    async fn delete(&self, id: ResumeId) -> DomainResult<u64>;
}
