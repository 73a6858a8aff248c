// src/application/commands/job_applications/mod.rs
mod create;
mod delete;
mod service;
mod update_status;

pub use create::CreateApplicationCommand;
pub use delete::DeleteApplicationCommand;
pub use service::ApplicationCommandService;
pub use update_status::UpdateApplicationStatusCommand;
