// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Both operations are CPU-heavy and run on
/// the blocking pool.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::hashing(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::hashing(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let Ok(parsed) = PasswordHash::new(&expected_hash) else {
                tracing::warn!("stored password hash is not in PHC format");
                return false;
            };
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .await
        .map_err(|err| ApplicationError::hashing(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = Argon2PasswordHasher;
        let hash = hasher.hash("s3cret-pass").await.unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("s3cret-pass", &hash).await.unwrap());
        assert!(!hasher.verify("wrong-pass", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = Argon2PasswordHasher;
        let first = hasher.hash("same").await.unwrap();
        let second = hasher.hash("same").await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same", &first).await.unwrap());
        assert!(hasher.verify("same", &second).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_a_mismatch() {
        let hasher = Argon2PasswordHasher;
        assert!(!hasher.verify("anything", "not-a-phc-string").await.unwrap());
        assert!(!hasher.verify("anything", "").await.unwrap());
    }

    #[tokio::test]
    async fn empty_password_still_hashes() {
        let hasher = Argon2PasswordHasher;
        let hash = hasher.hash("").await.unwrap();
        assert!(hasher.verify("", &hash).await.unwrap());
        assert!(!hasher.verify(" ", &hash).await.unwrap());
    }
}
