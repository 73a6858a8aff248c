// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    jwt_secret: String,
    token_ttl: Duration,
    request_timeout: Duration,
    allowed_origins: Vec<String>,
    admin: Option<AdminBootstrap>,
}

/// Credentials for the administrator account created at startup.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_token_ttl() -> u64 {
    60 * 60 * 24
}

fn default_request_timeout() -> u64 {
    30
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = non_empty("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let token_ttl = parse_secs(&non_empty, "TOKEN_TTL_SECONDS", default_token_ttl())?;
        let request_timeout = parse_secs(&non_empty, "REQUEST_TIMEOUT_SECS", default_request_timeout())?;
        if request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }

        let database_url = non_empty("DATABASE_URL");
        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let admin = match (non_empty("ADMIN_EMAIL"), non_empty("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                name: non_empty("ADMIN_NAME").unwrap_or_else(|| "Administrator".into()),
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        };

        Ok(Self {
            database_url,
            listen_addr,
            jwt_secret,
            token_ttl,
            request_timeout,
            allowed_origins,
            admin,
        })
    }

    /// Postgres URL. `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn admin(&self) -> Option<&AdminBootstrap> {
        self.admin.as_ref()
    }
}

fn parse_secs<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(Duration::from_secs(default)),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number of seconds"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn secret_is_required() {
        assert!(matches!(
            config_from(&[]),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
        assert!(matches!(
            config_from(&[("JWT_SECRET", "  ")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.jwt_secret(), b"s3cret");
        assert_eq!(config.token_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins(), ["http://localhost:3000"]);
        assert!(config.database_url().is_none());
        assert!(config.admin().is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("TOKEN_TTL_SECONDS", "60"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("DATABASE_URL", "postgres://localhost/jobs"),
            ("ADMIN_EMAIL", "root@example.com"),
            ("ADMIN_PASSWORD", "changeme1"),
        ])
        .unwrap();
        assert_eq!(config.token_ttl(), Duration::from_secs(60));
        assert_eq!(
            config.allowed_origins(),
            ["https://a.example", "https://b.example"]
        );
        assert_eq!(config.database_url(), Some("postgres://localhost/jobs"));
        let admin = config.admin().unwrap();
        assert_eq!(admin.email, "root@example.com");
        assert_eq!(admin.name, "Administrator");
        assert!(!format!("{admin:?}").contains("changeme1"));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(
            config_from(&[("JWT_SECRET", "s"), ("TOKEN_TTL_SECONDS", "soon")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("JWT_SECRET", "s"), ("REQUEST_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn partial_admin_credentials_are_rejected() {
        assert!(matches!(
            config_from(&[("JWT_SECRET", "s"), ("ADMIN_EMAIL", "root@example.com")]),
            Err(ConfigError::Missing("ADMIN_PASSWORD"))
        ));
    }
}
