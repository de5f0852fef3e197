//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DATABASE_URL` - Document store connection string (`postgres://...` or
//!   `memory://<name>`). When unset the API runs without a store and serves
//!   fallback content.
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8000)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Document store connection string (may contain a password)
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Emit JSON logs instead of text
    pub json_logs: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            json_logs: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HOST` or `PORT` cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match get("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").map(SecretString::from),
            host,
            port,
            json_logs: get("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 8000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_reads_port_and_database_url() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_URL", "postgres://localhost/nexora"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9100");
        assert_eq!(
            config.database_url.unwrap().expose_secret(),
            "postgres://localhost/nexora"
        );
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", ""), ("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));
    }

    #[test]
    fn test_json_log_format() {
        let config = ApiConfig::from_lookup(lookup(&[("LOG_FORMAT", "JSON")])).unwrap();
        assert!(config.json_logs);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = ApiConfig::from_lookup(lookup(&[(
            "DATABASE_URL",
            "postgres://user:super_secret_password@db/nexora",
        )]))
        .unwrap();
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super_secret_password"));
    }
}
