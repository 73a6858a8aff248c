// src/domain/vacancy/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewVacancy, Vacancy, VacancyChanges};
pub use repository::VacancyRepository;
pub use value_objects::{VacancyDetails, VacancyId, VacancyStatus};
