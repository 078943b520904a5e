//! Error handling utilities for repositories
//!
//! Every sqlx failure is mapped into the domain taxonomy at the call site:
//! reads become `ReadFailure`, writes become `WriteFailure`, and unique
//! violations become the matching conflict variant.

use gearup_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error from a SELECT into a DomainError
pub fn map_read_error(e: SqlxError) -> DomainError {
    DomainError::ReadFailure(e.to_string())
}

/// Convert a SQLx error from an INSERT/UPDATE/DELETE into a DomainError
pub fn map_write_error(e: SqlxError) -> DomainError {
    DomainError::WriteFailure(e.to_string())
}

/// Check for unique violation and return the given conflict, else a write
/// failure
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::WriteFailure(e.to_string())
}
