//! Error handling for the PLAIS client
//!
//! This module defines the error types returned by the client and the
//! classification helpers used when logging them.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the PLAIS client
#[derive(Error, Debug)]
pub enum PlaisError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Backend API errors
///
/// Both HTTP error statuses and transport failures land in the same
/// category; `status` is only present when the backend actually answered.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", describe_request_failure(.status, .message))]
    RequestFailed {
        status: Option<StatusCode>,
        message: String,
    },
}

fn describe_request_failure(status: &Option<StatusCode>, message: &str) -> String {
    match status {
        Some(status) if message.is_empty() => format!("request failed with HTTP {}", status),
        Some(status) => format!("request failed with HTTP {}: {}", status, message),
        None => format!("request failed: {}", message),
    }
}

impl ApiError {
    /// Failure reported by the backend with a non-success status
    pub fn from_status(status: StatusCode, body: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            status: Some(status),
            message: body.into(),
        }
    }

    /// Failure raised by reqwest itself: connect, timeout, body read or decode
    pub fn transport(error: &reqwest::Error) -> Self {
        ApiError::RequestFailed {
            status: error.status(),
            message: error.to_string(),
        }
    }

    /// HTTP status of the failed request, if the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
        }
    }
}

/// Result type alias for PLAIS client operations
pub type Result<T> = std::result::Result<T, PlaisError>;

impl PlaisError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PlaisError::Api(ApiError::RequestFailed { status, .. }) => match status {
                Some(status) => status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS,
                None => true,
            },
            PlaisError::Config(_) => false,
            PlaisError::ConfigSource(_) => false,
            PlaisError::Http(_) => false,
            PlaisError::UrlParse(_) => false,
            PlaisError::Logging(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlaisError::Config(_) => ErrorSeverity::Critical,
            PlaisError::ConfigSource(_) => ErrorSeverity::Critical,
            PlaisError::UrlParse(_) => ErrorSeverity::Critical,
            PlaisError::Api(ApiError::RequestFailed { status: Some(status), .. })
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
            {
                ErrorSeverity::Warning
            }
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
