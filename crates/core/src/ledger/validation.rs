//! Business rule validation for ledger entries.
//!
//! Rules are checked one at a time in a fixed order and the first one that
//! fails is reported. An entry is never reported with more than one violation.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::LedgerEntry;

/// Smallest year accepted as a plausible year of competence.
pub const MIN_PLAUSIBLE_YEAR: i32 = 1900;

/// Largest year accepted as a plausible year of competence.
pub const MAX_PLAUSIBLE_YEAR: i32 = 9999;

/// A ledger entry rule that was not satisfied.
///
/// Variants are listed in evaluation order; the message of each is what the
/// end user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Description is missing or blank.
    #[error("Informe uma descrição valida.")]
    InvalidDescription,

    /// Month is missing or outside 1-12.
    #[error("Informe um mês válido.")]
    InvalidMonth,

    /// Year is missing or not a plausible calendar year.
    #[error("Informe um ano válido.")]
    InvalidYear,

    /// Owner is missing or has no identifier.
    #[error("Informe um usuário.")]
    MissingOwner,

    /// Amount is missing, zero or negative.
    #[error("Informe um valor válido.")]
    InvalidAmount,

    /// Entry type is missing.
    #[error("Informe um tipo de lançamento.")]
    MissingEntryType,
}

impl RuleViolation {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDescription => "INVALID_DESCRIPTION",
            Self::InvalidMonth => "INVALID_MONTH",
            Self::InvalidYear => "INVALID_YEAR",
            Self::MissingOwner => "MISSING_OWNER",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::MissingEntryType => "MISSING_ENTRY_TYPE",
        }
    }
}

/// Returns true if `year` is accepted as a year of competence.
#[must_use]
pub fn is_plausible_year(year: i32) -> bool {
    (MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year)
}

/// Validates a ledger entry before it is created or updated.
///
/// # Errors
///
/// Returns the first rule the entry breaks, in this order: description,
/// month, year, owner, amount, type.
pub fn validate_entry(entry: &LedgerEntry) -> Result<(), RuleViolation> {
    if entry
        .description
        .as_deref()
        .is_none_or(|description| description.trim().is_empty())
    {
        return Err(RuleViolation::InvalidDescription);
    }

    if !entry.month.is_some_and(|month| (1..=12).contains(&month)) {
        return Err(RuleViolation::InvalidMonth);
    }

    if !entry.year.is_some_and(is_plausible_year) {
        return Err(RuleViolation::InvalidYear);
    }

    if entry.owner_id().is_none() {
        return Err(RuleViolation::MissingOwner);
    }

    if !entry.amount.is_some_and(|amount| amount > Decimal::ZERO) {
        return Err(RuleViolation::InvalidAmount);
    }

    if entry.entry_type.is_none() {
        return Err(RuleViolation::MissingEntryType);
    }

    Ok(())
}
