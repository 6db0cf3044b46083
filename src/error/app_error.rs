//! Unified application error.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Errors surfaced by the users API, configuration and startup.
#[derive(Debug, Error)]
pub enum AppError {
    /// The transport (or an interceptor beneath it) failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body was not the expected JSON.
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A setting could not be parsed.
    #[error("Invalid value for {key}: {message}")]
    Config { key: String, message: String },

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    /// The category used for user messaging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Http(HttpError::ServerError { .. }) => ErrorCategory::Server,
            AppError::Http(HttpError::Cancelled) => ErrorCategory::Cancelled,
            AppError::Http(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
            AppError::Http(_) => ErrorCategory::Network,
            AppError::Decode { .. } => ErrorCategory::Client,
            AppError::Config { .. } => ErrorCategory::Configuration,
            AppError::Io(_) => ErrorCategory::System,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Http(err) => err.error_code(),
            AppError::Decode { .. } => "E_DECODE",
            AppError::Config { .. } => "E_CONFIG",
            AppError::Io(_) => "E_IO",
        }
    }

    /// Message suitable for display in the status line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(HttpError::ServerError { status, .. }) => match *status {
                404 => "The requested user was not found.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The server is experiencing issues.".to_string(),
                _ => format!("The server returned HTTP {}.", status),
            },
            AppError::Http(HttpError::Cancelled) => "The request was cancelled.".to_string(),
            AppError::Http(HttpError::Timeout(_)) => "The request timed out.".to_string(),
            AppError::Http(HttpError::ConnectionFailed(_)) => {
                "Unable to connect. Please check your internet connection.".to_string()
            }
            AppError::Http(err) => err.to_string(),
            AppError::Decode { what, .. } => format!("Received an invalid {}.", what),
            AppError::Config { key, message } => format!("{}: {}", key, message),
            AppError::Io(err) => format!("I/O error: {}", err),
        }
    }
}
