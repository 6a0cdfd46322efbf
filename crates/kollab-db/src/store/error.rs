//! Error handling utilities for the store

use kollab_core::RelayError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error to the domain persistence error
pub fn map_db_error(e: SqlxError) -> RelayError {
    RelayError::Persistence(e.to_string())
}
