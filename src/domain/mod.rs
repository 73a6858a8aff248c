// src/domain/mod.rs
pub mod authorization;
pub mod errors;
pub mod job_application;
pub mod resume;
pub mod user;
pub mod vacancy;
