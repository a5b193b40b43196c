//! Error handling for the authentication gateway.
//!
//! Failures inside the gate itself never surface here: they are resolved into
//! a per-request rejection response. This error type covers everything around
//! the gate, such as configuration loading and server startup.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for gateway operations
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl GateError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        GateError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = GateError::config("missing auth.server_url");
        assert_eq!(err.to_string(), "Config error: missing auth.server_url");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: GateError = io.into();
        assert!(matches!(err, GateError::Io(_)));
    }
}
