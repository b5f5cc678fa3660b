//! Error types for QuizChat Core
//!
//! UI operations never fail; these errors only come out of startup loading
//! (settings file, fixture override).

use thiserror::Error;

/// Main error type for QuizChat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Fixture loading errors
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed fixture data: {0}")]
    Malformed(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed settings: {0}")]
    Malformed(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
