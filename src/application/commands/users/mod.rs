// src/application/commands/users/mod.rs
mod bootstrap;
mod delete;
mod login;
mod password;
mod register;
mod service;
mod update;

pub use bootstrap::EnsureAdminCommand;
pub use delete::DeleteUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
