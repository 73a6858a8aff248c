// src/application/queries/vacancies/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        access::ensure_allowed,
        dto::{AuthenticatedUser, VacancyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        authorization::{Action, Resource},
        vacancy::{VacancyId, VacancyRepository, VacancyStatus},
    },
};

/// Read side for vacancies. Listing and fetching are public.
pub struct VacancyQueryService {
    vacancy_repo: Arc<dyn VacancyRepository>,
}

#[derive(Debug, Default)]
pub struct ListVacanciesQuery {
    pub status: Option<VacancyStatus>,
}

impl VacancyQueryService {
    pub fn new(vacancy_repo: Arc<dyn VacancyRepository>) -> Self {
        Self { vacancy_repo }
    }

    pub async fn list(&self, query: ListVacanciesQuery) -> ApplicationResult<Vec<VacancyDto>> {
        let vacancies = self.vacancy_repo.list_all().await?;
        Ok(vacancies
            .into_iter()
            .filter(|vacancy| query.status.is_none_or(|status| vacancy.status == status))
            .map(Into::into)
            .collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<VacancyDto> {
        let id = VacancyId::new(id)?;
        tracing::debug!(vacancy_id = %id, "fetching vacancy");
        self.vacancy_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::missing(Resource::Vacancy))
    }

    pub async fn list_mine(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<VacancyDto>> {
        ensure_allowed(&actor.principal(), Action::ListOwnedBy(actor.id))?;
        let vacancies = self.vacancy_repo.list_by_owner(actor.id).await?;
        Ok(vacancies.into_iter().map(Into::into).collect())
    }
}
