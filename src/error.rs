//! Custom error types for Spendbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Spendbook operations
#[derive(Error, Debug)]
pub enum SpendbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings file)
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expense position outside the ledger bounds
    #[error("Position {position} is out of range (ledger has {len} entries)")]
    OutOfRange { position: usize, len: usize },

    /// Registration collision on an existing username
    #[error("User already exists: {username}")]
    DuplicateUser { username: String },

    /// Login with a username/password pair that matches no user
    #[error("Invalid username or password")]
    Auth,

    /// Operation that requires a logged-in user was called while logged out
    #[error("No user is logged in")]
    NotLoggedIn,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendbookError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication failure
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Spendbook operations
pub type SpendbookResult<T> = Result<T, SpendbookError>;
