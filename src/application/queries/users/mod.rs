// src/application/queries/users/mod.rs
mod get;
mod list;
mod profile;
mod service;
mod stats;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
