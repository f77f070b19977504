//! Ledger error types for validation, contract and storage errors.

use ledgerly_shared::{AppError, StorageError};
use thiserror::Error;

use super::validation::RuleViolation;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The entry broke a business rule.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// Update, delete or status change was called on an entry that was never persisted.
    #[error("ledger entry has not been persisted yet")]
    NotPersisted,

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Rule(violation) => violation.error_code(),
            Self::NotPersisted => "ENTRY_NOT_PERSISTED",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Rule(_) => 400,
            // Caller misuse, not a business outcome.
            Self::NotPersisted => 500,
            Self::Storage(StorageError::Unavailable(_)) => 503,
            Self::Storage(_) => 500,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Rule(violation) => Self::BusinessRule(violation.to_string()),
            LedgerError::NotPersisted => Self::Internal(LedgerError::NotPersisted.to_string()),
            LedgerError::Storage(storage) => Self::Storage(storage),
        }
    }
}
