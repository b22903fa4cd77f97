use std::io;
use thiserror::Error;

use crate::llm::CompletionError;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents (de)serialization errors outside of dataset loading.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The role dataset is missing or malformed. Fatal at startup.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A completion call failed in a way the caller chose to surface.
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Validation(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Io(io::Error::other(format!("HTTP error: {}", err)))
    }
}

impl AppError {
    /// True for errors that mean the deployment itself is broken.
    pub fn is_fatal(&self) -> bool {
        match self {
            AppError::Config(_) | AppError::Dataset(_) => true,
            AppError::Completion(e) => e.is_fatal(),
            _ => false,
        }
    }
}
