//! Process configuration
//!
//! Defaults, overridden by `CART_*` environment variables, then validated.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// JSON product list; the built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                port: 8000,
                request_timeout_secs: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Compact,
            },
            catalog: CatalogConfig::default(),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_source(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, so tests need not touch
    /// the real environment.
    pub fn from_env_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env_overrides(|key| lookup(key).filter(|v| !v.trim().is_empty()))?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides<F>(&mut self, read_env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = read_env("CART_BIND_ADDRESS") {
            self.server.bind_address = parse_env("CART_BIND_ADDRESS", &value)?;
        }
        if let Some(value) = read_env("CART_PORT") {
            self.server.port = parse_env("CART_PORT", &value)?;
        }
        if let Some(value) = read_env("CART_REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = parse_env("CART_REQUEST_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = read_env("CART_LOG_LEVEL") {
            self.logging.level = value.trim().to_ascii_lowercase();
        }
        if let Some(value) = read_env("CART_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }

        if let Some(value) = read_env("CART_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(value));
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "unsupported log level `{other}` (expected trace|debug|info|warn|error)"
            ))),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvOverride {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_env_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load_with(&[
            ("CART_BIND_ADDRESS", "127.0.0.1"),
            ("CART_PORT", "9090"),
            ("CART_REQUEST_TIMEOUT_SECS", "3"),
            ("CART_LOG_LEVEL", "DEBUG"),
            ("CART_LOG_FORMAT", "json"),
            ("CART_CATALOG_PATH", "/srv/catalog.json"),
        ])
        .unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.server.request_timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/catalog.json")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = load_with(&[("CART_PORT", "  ")]).unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn invalid_values_fail_with_actionable_errors() {
        let err = load_with(&[("CART_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid environment override for `CART_PORT`: `eighty`"
        );

        let err = load_with(&[("CART_LOG_FORMAT", "xml")]).unwrap_err();
        assert!(err.to_string().contains("unsupported log format"));

        let err = load_with(&[("CART_LOG_LEVEL", "loud")]).unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));

        let err = load_with(&[("CART_REQUEST_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
