use std::time::Duration;

use thiserror::Error;

/// Errors raised while reading the external booking ledger.
///
/// The engine treats the variants very differently: `PermissionDenied` is
/// recoverable (availability is computed without exclusions and a warning is
/// surfaced to the caller), while `Timeout` and `Unavailable` abort the
/// invocation with an empty result.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger access denied: {0}")]
    PermissionDenied(String),

    #[error("Ledger read timed out after {0:?}")]
    Timeout(Duration),

    #[error("Ledger unavailable: {0}")]
    Unavailable(#[from] eyre::Report),
}

impl LedgerError {
    /// Whether this failure belongs to the recoverable permission class.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, LedgerError::PermissionDenied(_))
    }
}

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;
