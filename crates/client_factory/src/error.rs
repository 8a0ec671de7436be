//! Client factory error types

use thiserror::Error;

/// Errors raised while building or probing a cluster client
#[derive(Debug, Error)]
pub enum ClientFactoryError {
    /// Base URL unusable
    #[error("invalid cluster url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// HTTP client construction failure
    #[error("failed to build http client: {message}")]
    Build { message: String },

    /// Startup connectivity check failed
    #[error("could not connect to cluster at {endpoint}: {message}")]
    Unreachable { endpoint: String, message: String },
}

impl ClientFactoryError {
    /// Create an invalid-url error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unreachable error
    pub fn unreachable(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for client factory operations
pub type Result<T> = std::result::Result<T, ClientFactoryError>;
