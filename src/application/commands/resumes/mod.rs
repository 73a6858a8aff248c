// src/application/commands/resumes/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateResumeCommand;
pub use delete::DeleteResumeCommand;
pub use service::ResumeCommandService;
pub use update::UpdateResumeCommand;
