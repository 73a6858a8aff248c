// src/domain/job_application/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{JobApplication, NewJobApplication};
pub use repository::ApplicationRepository;
pub use value_objects::{ApplicationId, ApplicationStatus};
