// src/lib.rs
//! Identity and authorization core of a job board: accounts and roles,
//! vacancies, resumes and job applications, JWT access tokens and a single
//! authorization policy, served over an axum HTTP API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
