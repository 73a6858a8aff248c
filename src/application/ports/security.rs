// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash. Fails only when the hashing primitive itself fails.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Constant-time check. A mismatch is `Ok(false)`, never an error.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Issue a token for `subject` that expires `ttl` from now.
    async fn issue(&self, subject: TokenSubject, ttl: Duration) -> ApplicationResult<AuthTokenDto>;

    /// Issue a token with the configured default lifetime.
    async fn issue_default(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;

    /// Verify signature, algorithm and expiry, then return the embedded identity.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
