// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_application;
mod postgres_resume;
mod postgres_user;
mod postgres_vacancy;

pub use error::map_sqlx;
pub use memory::InMemoryStore;
pub use postgres_application::PostgresApplicationRepository;
pub use postgres_resume::PostgresResumeRepository;
pub use postgres_user::PostgresUserRepository;
pub use postgres_vacancy::PostgresVacancyRepository;
