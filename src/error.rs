//! Unified error types for the info service.

use thiserror::Error;

/// Unified error type for the info service.
///
/// The three HTTP handlers have no failure branches; everything here
/// is infrastructural (configuration, socket binding, serving).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error (bind failure, serve failure).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
