//! Application configuration.
//!
//! Settings are read from environment variables (optionally via a `.env`
//! file loaded in `main`), with defaults suitable for local development.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Runtime settings for the service.
///
/// # Example
/// ```rust
/// use firequote::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.port, 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bind host.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Database connection string.
    pub database_url: String,

    /// Request timeout in seconds for the HTTP layer.
    pub request_timeout_secs: u64,

    /// Running environment (development, testing, production).
    pub environment: Environment,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite://data/quotes.db?mode=rwc".to_string(),
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    /// Currently infallible in practice; kept as `Result` so later required
    /// variables don't change the signature.
    pub fn from_env() -> Result<Self> {
        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_env = |key: &str, default: u64| -> u64 {
            env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Ok(Self {
            host: get_env("HOST", "127.0.0.1"),
            port: parse_env("PORT", 3000) as u16,
            database_url: get_env("DATABASE_URL", "sqlite://data/quotes.db?mode=rwc"),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// Sanity-checks the loaded settings.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("PORT must be non-zero".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS must be non-zero".to_string(),
            ));
        }

        if self.environment.is_production() && self.database_url.contains(":memory:") {
            return Err(AppError::Config(
                "In-memory database is not allowed in production".to_string(),
            ));
        }

        Ok(())
    }
}

// =====================================
// Builder
// =====================================
/// Incremental construction of a [`Config`], mainly for tests.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// Builds and validates in one step.
    ///
    /// # Errors
    /// Returns the first validation failure.
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.environment.is_development());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(Environment::from("development".to_string()), Environment::Development);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = Config::default();
        config.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_memory_db_in_production() {
        let config = ConfigBuilder::new()
            .environment(Environment::Production)
            .database_url("sqlite::memory:")
            .build();

        assert!(config.validate().is_err());
    }
}
