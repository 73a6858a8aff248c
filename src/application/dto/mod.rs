// src/application/dto/mod.rs
pub mod applications;
pub mod auth;
pub mod resumes;
pub mod users;
pub mod vacancies;

pub use applications::ApplicationDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, PrincipalDto, TokenSubject};
pub use resumes::ResumeDto;
pub use users::{UserDto, UserStatsDto};
pub use vacancies::VacancyDto;
