// src/main.rs
use anyhow::Result;
use jobboard_core::application::{
    commands::users::EnsureAdminCommand,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::{ApplicationServices, Repositories},
};
use jobboard_core::config::AppConfig;
use jobboard_core::infrastructure::{
    database,
    repositories::{
        InMemoryStore, PostgresApplicationRepository, PostgresResumeRepository,
        PostgresUserRepository, PostgresVacancyRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenManager},
    time::SystemClock,
};
use jobboard_core::presentation::http::{
    routes::{RouterConfig, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repositories = open_repositories(&config).await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);

    let services = Arc::new(ApplicationServices::new(
        repositories,
        password_hasher,
        token_manager,
        clock,
    ));

    if let Some(admin) = config.admin() {
        let user = services
            .user_commands
            .ensure_admin(EnsureAdminCommand {
                email: admin.email.clone(),
                password: admin.password.clone(),
                name: admin.name.clone(),
            })
            .await?;
        tracing::info!(user_id = user.id, "administrator account ready");
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let router_config = RouterConfig {
        allowed_origins: config.allowed_origins().to_vec(),
        request_timeout: config.request_timeout(),
    };
    let app = build_router(state, &router_config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_repositories(config: &AppConfig) -> Result<Repositories> {
    let Some(url) = config.database_url() else {
        tracing::warn!("DATABASE_URL not set; using the in-memory store, data will not persist");
        return Ok(InMemoryStore::new().repositories());
    };

    let pool = database::init_pool(url).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        vacancies: Arc::new(PostgresVacancyRepository::new(pool.clone())),
        resumes: Arc::new(PostgresResumeRepository::new(pool.clone())),
        applications: Arc::new(PostgresApplicationRepository::new(pool)),
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
