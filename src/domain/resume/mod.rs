// src/domain/resume/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewResume, Resume, ResumeChanges};
pub use repository::ResumeRepository;
pub use value_objects::{ResumeDetails, ResumeId, ResumeStatus};
