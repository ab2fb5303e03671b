use thiserror::Error;

use crate::api::backend::ApiError;

/// Reasons a form is refused before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Auth code must be {expected} digits")]
    AuthCodeLengthMismatch { expected: usize, actual: usize },
    #[error("Invalid amount")]
    InvalidAmount,
}

/// Session-level errors
#[derive(Debug, Error)]
pub enum PosError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Invalid username or password")]
    LoginFailed,
    #[error("No transaction to print.")]
    NoTransaction,
    #[error("History fetch failed: {0}")]
    History(#[from] ApiError),
    #[error("Authentication unavailable: {0}")]
    Auth(String),
    #[error("Failed to print receipt: {0}")]
    Print(#[from] std::io::Error),
}

/// Errors loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
