//! Personal ledger entries.
//!
//! This module implements:
//! - Ledger entry types and statuses
//! - Business rule validation
//! - Query-by-example filtering
//! - Balance aggregation
//! - The storage contract and the service that drives it

pub mod balance;
pub mod entry;
pub mod error;
pub mod filter;
pub mod repository;
pub mod service;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{BalanceSummary, net_balance};
pub use entry::{EntryStatus, EntryType, LedgerEntry, NewLedgerEntry, OwnerRef};
pub use error::LedgerError;
pub use filter::EntryFilter;
pub use repository::LedgerRepository;
pub use service::LedgerService;
pub use validation::{MAX_PLAUSIBLE_YEAR, MIN_PLAUSIBLE_YEAR, RuleViolation, validate_entry};
