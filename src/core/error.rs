//! # Common Error Types
//!
//! Consolidated error handling for the application.
//!
//! There is no real I/O in this demo, so the surface is small: errors are
//! either rejected user input or an internal state problem. No error is fatal
//! to the process and there is no retry policy.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive message; `thiserror` provides the
/// `Display` and `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// User input validation failure.
    ///
    /// The only hard rule in the app: search submission requires a non-empty
    /// origin, destination, and travel date. Passenger names are optional and
    /// never produce this.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Application state management failure, e.g. an action arriving for a
    /// screen whose backing data is missing. Should not happen in normal
    /// operation.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Validation(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Validation(msg.to_string())
    }
}
