//! Error types for staticscan

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for staticscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A local file named by the caller could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ConfigError::InvalidRequest(err.to_string()).into()
        } else {
            ApiError::from(err).into()
        }
    }
}

/// Errors raised while talking to the scanning service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with anything other than 200 OK
    #[error("{operation} failed: {status}")]
    Remote {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of a remote failure, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to scan server: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and request-construction errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `staticscan init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `staticscan init` or pass --api-key.")]
    MissingApiKey,

    #[error("Scan server not configured. Run `staticscan init` or pass --server.")]
    MissingServer,

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
