//! Configuration management for the authentication gateway.
//!
//! This module handles gateway configuration including the HTTP listener,
//! the authentication service endpoint, and logging.

use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server information
    #[serde(default)]
    pub server: ServerConfig,

    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Authentication service configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name
    #[serde(default = "default_server_name")]
    pub name: String,

    /// Number of worker threads (0 = one per core)
    #[serde(default)]
    pub workers: usize,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port number
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Authentication service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the remote authentication service
    #[serde(default = "default_auth_server_url")]
    pub server_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log format enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

// Default value functions
fn default_server_name() -> String {
    crate::SERVER_NAME.to_string()
}
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_auth_server_url() -> String {
    "http://127.0.0.1:8090".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            http: HttpConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            workers: 0,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            server_url: default_auth_server_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GateError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| GateError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GateError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| GateError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.http.port == 0 {
            return Err(GateError::config("http.port must be non-zero"));
        }

        if self.auth.server_url.is_empty() {
            return Err(GateError::config("auth.server_url must not be empty"));
        }

        let url = url::Url::parse(&self.auth.server_url).map_err(|e| {
            GateError::Config(format!("auth.server_url is not a valid URL: {}", e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(GateError::Config(format!(
                "auth.server_url must use http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}
