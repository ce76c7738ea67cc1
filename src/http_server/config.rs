//! HTTP Server Configuration
//!
//! Configuration for the HTTP server: bind address, CORS, record store and
//! logging. Values come from defaults, an optional JSON file, then
//! environment and command-line overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::LogFormat;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty allows any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Record store connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled store connections (default: 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Log filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://products.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

/// Values that take precedence over the config file when set.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    pub log_format: Option<LogFormat>,
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Read a JSON config file; missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Defaults, then the optional file, then overrides; validated.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(database_url) = overrides.database_url {
            self.database_url = database_url;
        }
        if let Some(max_connections) = overrides.max_connections {
            self.max_connections = max_connections;
        }
        if let Some(log_format) = overrides.log_format {
            self.log_format = log_format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "database_url must not be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.log_filter, "info,tower_http=debug");
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_file_keys_fall_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 4000, "log_format": "json"}}"#).unwrap();

        let config = HttpServerConfig::from_file(file.path()).unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database_url, "sqlite://products.db?mode=rwc");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 4000, "max_connections": 2}}"#).unwrap();

        let config = HttpServerConfig::load(
            Some(file.path()),
            ConfigOverrides {
                port: Some(5000),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = HttpServerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_connections_is_invalid() {
        let result = HttpServerConfig::load(
            None,
            ConfigOverrides {
                max_connections: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
