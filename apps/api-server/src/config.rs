//! Application configuration loaded from environment variables.

use std::env;
use std::sync::OnceLock;

use quill_infra::DatabaseConfig;

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Deployment environment. Controls how much of an internal error reaches clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Make this the process-wide environment. Only the first call takes effect.
    pub fn install(self) {
        if ENVIRONMENT.set(self).is_err() {
            tracing::warn!("Environment already installed, ignoring {:?}", self);
        }
    }

    /// The installed environment, or `Development` if none was installed.
    pub fn current() -> Self {
        ENVIRONMENT.get().copied().unwrap_or_default()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                config.max_connections = max;
            }
            if let Some(min) = env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            database,
        }
    }
}
