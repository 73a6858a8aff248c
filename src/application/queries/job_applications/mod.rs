// src/application/queries/job_applications/mod.rs
mod employer;
mod service;

pub use service::ApplicationQueryService;
