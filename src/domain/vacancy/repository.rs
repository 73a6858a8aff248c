// src/domain/vacancy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::vacancy::{
    entity::{NewVacancy, Vacancy},
    value_objects::VacancyId,
};
use async_trait::async_trait;

#[async_trait]
pub trait VacancyRepository: Send + Sync {
    async fn insert(&self, vacancy: NewVacancy) -> DomainResult<Vacancy>;
    async fn find_by_id(&self, id: VacancyId) -> DomainResult<Option<Vacancy>>;
    async fn list_all(&self) -> DomainResult<Vec<Vacancy>>;
    async fn list_by_owner(&self, employer_id: UserId) -> DomainResult<Vec<Vacancy>>;
    async fn update(&self, vacancy: &Vacancy) -> DomainResult<Vacancy>;
    /// Same contract as `ResumeRepository::delete`: applications to the vacancy
    /// are removed together with it.
    async fn delete(&self, id: VacancyId) -> DomainResult<u64>;
}
