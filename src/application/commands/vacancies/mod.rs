// src/application/commands/vacancies/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateVacancyCommand;
pub use delete::DeleteVacancyCommand;
pub use service::VacancyCommandService;
pub use update::UpdateVacancyCommand;
