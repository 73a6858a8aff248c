// src/application/commands/vacancies/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        authorization::Resource,
        vacancy::{Vacancy, VacancyId, VacancyRepository},
    },
};

pub struct VacancyCommandService {
    pub(super) vacancy_repo: Arc<dyn VacancyRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl VacancyCommandService {
    pub fn new(vacancy_repo: Arc<dyn VacancyRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { vacancy_repo, clock }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Vacancy> {
        let id = VacancyId::new(id)?;
        self.vacancy_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::missing(Resource::Vacancy))
    }
}
