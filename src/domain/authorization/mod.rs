// src/domain/authorization/mod.rs
//! Ownership and role rules for every protected operation, in one place.
pub mod decision;
pub mod policy;
pub mod principal;

pub use decision::{Decision, Denial, Resource};
pub use policy::{Action, authorize};
pub use principal::Principal;
