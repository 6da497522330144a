//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum TravelPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TravelPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error was caused by caller input rather than the system
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, TravelPlannerError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelPlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelPlannerError::Api { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            TravelPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelPlannerError::General { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for TravelPlannerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TravelPlannerError::api(format!("Request timed out: {err}"))
        } else if err.is_decode() {
            TravelPlannerError::api(format!("Malformed response: {err}"))
        } else {
            TravelPlannerError::api(err.to_string())
        }
    }
}
