// tests/support/fixtures.rs
use std::sync::Arc;
use std::time::Duration;

use jobboard_core::application::commands::resumes::CreateResumeCommand;
use jobboard_core::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use jobboard_core::application::commands::vacancies::CreateVacancyCommand;
use jobboard_core::application::dto::{AuthenticatedUser, UserDto};
use jobboard_core::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use jobboard_core::application::services::{ApplicationServices, Repositories};
use jobboard_core::domain::resume::ResumeDetails;
use jobboard_core::domain::user::Role;
use jobboard_core::domain::vacancy::VacancyDetails;
use jobboard_core::infrastructure::repositories::InMemoryStore;
use jobboard_core::infrastructure::security::JwtTokenManager;

use super::mocks::{FixedClock, PlainPasswordHasher};

pub const TEST_SECRET: &[u8] = b"integration-test-signing-secret";
pub const TEST_TTL: Duration = Duration::from_secs(3600);
pub const TEST_PASSWORD: &str = "secret1";

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
}

pub fn build_app() -> TestApp {
    let store = InMemoryStore::new();
    let repositories = store.repositories();
    build_app_with(store, repositories, Arc::new(PlainPasswordHasher))
}

pub fn build_app_with(
    store: Arc<InMemoryStore>,
    repositories: Repositories,
    password_hasher: Arc<dyn PasswordHasher>,
) -> TestApp {
    let clock = Arc::new(FixedClock::new());
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        JwtTokenManager::new(TEST_SECRET, TEST_TTL, Arc::clone(&clock) as Arc<dyn Clock>)
            .expect("token manager"),
    );
    let services = Arc::new(ApplicationServices::new(
        repositories,
        password_hasher,
        token_manager,
        Arc::clone(&clock) as Arc<dyn Clock>,
    ));

    TestApp {
        services,
        store,
        clock,
    }
}

impl TestApp {
    pub async fn register(&self, email: &str, name: &str, role: Role) -> UserDto {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                email: email.into(),
                password: TEST_PASSWORD.into(),
                name: name.into(),
                role,
            })
            .await
            .expect("registration succeeds")
    }

    /// Log in with the shared test password and return the bearer token.
    pub async fn token_for(&self, email: &str) -> String {
        self.services
            .user_commands
            .login(LoginUserCommand {
                email: email.into(),
                password: TEST_PASSWORD.into(),
            })
            .await
            .expect("login succeeds")
            .token
            .token
    }

    /// Register, log in and verify the token, the way a request would.
    pub async fn sign_up(&self, email: &str, name: &str, role: Role) -> AuthenticatedUser {
        self.register(email, name, role).await;
        let token = self.token_for(email).await;
        self.services
            .authenticate(&token)
            .await
            .expect("fresh token verifies")
    }
}

pub fn vacancy_command(title: &str) -> CreateVacancyCommand {
    CreateVacancyCommand {
        details: VacancyDetails {
            title: title.into(),
            description: "Build and run the hiring pipeline".into(),
            salary: Some(120_000),
            location: "Remote".into(),
            skills: vec!["rust".into(), "sql".into()],
            ..VacancyDetails::default()
        },
        status: None,
    }
}

pub fn resume_command(title: &str) -> CreateResumeCommand {
    CreateResumeCommand {
        details: ResumeDetails {
            title: title.into(),
            skills: vec!["rust".into()],
            experience: "5 years".into(),
            ..ResumeDetails::default()
        },
        status: None,
    }
}
