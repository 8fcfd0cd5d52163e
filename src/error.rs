//! Error types for Libris

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("Already returned: {0}")]
    AlreadyReturned(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Whether the shell should report this error and keep looping.
    ///
    /// Lending refusals are part of normal operation; storage failures
    /// are not and must propagate (there is no retry or recovery path).
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::NotFound(_) | AppError::Unavailable(_) | AppError::AlreadyReturned(_) => true,
            AppError::Database(_) => false,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
