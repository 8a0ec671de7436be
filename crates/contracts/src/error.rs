//! Layered error definitions
//!
//! Categorized by stage: config / connect / read / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum TelemetryError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Connection Errors =====
    /// Cluster unreachable during the startup connectivity check
    #[error("could not connect to cluster at {endpoint}: {message}")]
    Connection { endpoint: String, message: String },

    // ===== Read Errors =====
    /// Source read exceeded the configured timeout
    #[error("timeout: could not query {endpoint} in {timeout_secs}s due to {message}")]
    ReadTimeout {
        endpoint: String,
        timeout_secs: u64,
        message: String,
    },

    /// Source read or transform failure
    #[error("could not query {endpoint} due to {message}")]
    Read { endpoint: String, message: String },

    // ===== Sink Errors =====
    /// Target write failure
    #[error("write to index '{index}' failed: {message}")]
    SinkWrite { index: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl TelemetryError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create connection error
    pub fn connection(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create read timeout error
    pub fn read_timeout(
        endpoint: impl Into<String>,
        timeout_secs: u64,
        message: impl Into<String>,
    ) -> Self {
        Self::ReadTimeout {
            endpoint: endpoint.into(),
            timeout_secs,
            message: message.into(),
        }
    }

    /// Create read error
    pub fn read(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(index: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            index: index.into(),
            message: message.into(),
        }
    }

    /// Whether this is a read timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ReadTimeout { .. })
    }
}
