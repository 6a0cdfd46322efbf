//! Application-level errors
//!
//! Wraps domain errors and infrastructure failures for the outer layers
//! (server startup, wiring). Request-scoped relay failures stay
//! [`RelayError`]; `AppError` is for things the binary cares about.

use kollab_core::RelayError;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration problem at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connectivity or migration failure
    #[error("Database error: {0}")]
    Database(String),

    /// Domain-level relay error
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Wrap an arbitrary error as internal
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Get an error code string for logs and wire errors
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Relay(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
