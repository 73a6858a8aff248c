// tests/support/mocks.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use jobboard_core::application::{ApplicationError, ApplicationResult};
use jobboard_core::application::ports::{security::PasswordHasher, time::Clock};
use jobboard_core::domain::errors::{DomainError, DomainResult};
use jobboard_core::domain::job_application::{
    ApplicationId, ApplicationRepository, JobApplication, NewJobApplication,
};
use jobboard_core::domain::resume::{NewResume, Resume, ResumeId, ResumeRepository};
use jobboard_core::domain::user::UserId;
use jobboard_core::domain::vacancy::VacancyId;

/// Clock that only moves when told to.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::at(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Reversible stand-in for argon2 so tests do not pay for real hashing.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash
            .strip_prefix("plain$")
            .is_some_and(|stored| stored == password))
    }
}

/// Hasher whose primitive always fails.
pub struct BrokenPasswordHasher;

#[async_trait]
impl PasswordHasher for BrokenPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::hashing("entropy source unavailable"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::hashing("entropy source unavailable"))
    }
}

/// Counts `verify` calls and otherwise behaves like `PlainPasswordHasher`.
#[derive(Default)]
pub struct CountingPasswordHasher {
    pub verifications: AtomicUsize,
}

impl CountingPasswordHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        PlainPasswordHasher.hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        PlainPasswordHasher.verify(password, expected_hash).await
    }
}

/// Resume store whose delete always fails, as if the database went away mid-request.
pub struct FailingResumeDelete {
    pub inner: Arc<dyn ResumeRepository>,
}

#[async_trait]
impl ResumeRepository for FailingResumeDelete {
    async fn insert(&self, resume: NewResume) -> DomainResult<Resume> {
        self.inner.insert(resume).await
    }

    async fn find_by_id(&self, id: ResumeId) -> DomainResult<Option<Resume>> {
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> DomainResult<Vec<Resume>> {
        self.inner.list_all().await
    }

    async fn list_by_owner(&self, user_id: UserId) -> DomainResult<Vec<Resume>> {
        self.inner.list_by_owner(user_id).await
    }

    async fn update(&self, resume: &Resume) -> DomainResult<Resume> {
        self.inner.update(resume).await
    }

    async fn delete(&self, _id: ResumeId) -> DomainResult<u64> {
        Err(DomainError::persistence("connection reset by peer"))
    }
}

/// Application store that hides existing rows from `list_by_owner` and
/// rejects every insert as a duplicate. Models a concurrent request winning
/// the race between the advisory check and the insert.
pub struct RacingApplicationRepo {
    pub inner: Arc<dyn ApplicationRepository>,
}

#[async_trait]
impl ApplicationRepository for RacingApplicationRepo {
    async fn insert(&self, _application: NewJobApplication) -> DomainResult<JobApplication> {
        Err(DomainError::conflict(
            "application for this vacancy already exists",
        ))
    }

    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplication>> {
        self.inner.find_by_id(id).await
    }

    async fn list_by_owner(&self, _user_id: UserId) -> DomainResult<Vec<JobApplication>> {
        Ok(Vec::new())
    }

    async fn list_by_vacancy(&self, vacancy_id: VacancyId) -> DomainResult<Vec<JobApplication>> {
        self.inner.list_by_vacancy(vacancy_id).await
    }

    async fn update_status(&self, application: &JobApplication) -> DomainResult<JobApplication> {
        self.inner.update_status(application).await
    }

    async fn delete(&self, id: ApplicationId) -> DomainResult<()> {
        self.inner.delete(id).await
    }

    async fn count(&self) -> DomainResult<u64> {
        self.inner.count().await
    }
}
