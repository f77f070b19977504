//! Ledger service for entry creation, updates, status changes and queries.
//!
//! This module owns the rules that gate every write: entries are validated
//! before they reach storage, and anything other than creation requires an
//! entry that storage has already assigned an id to.

use ledgerly_shared::types::{LedgerEntryId, UserId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::balance::{BalanceSummary, net_balance};
use super::entry::{EntryStatus, LedgerEntry};
use super::error::LedgerError;
use super::filter::EntryFilter;
use super::repository::LedgerRepository;
use super::validation::validate_entry;

/// Ledger service over a storage backend.
///
/// Holds no state of its own besides the repository.
#[derive(Debug, Clone)]
pub struct LedgerService<R> {
    repository: R,
}

impl<R: LedgerRepository> LedgerService<R> {
    /// Creates a new ledger service.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validates an entry without touching storage.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule as `LedgerError::Rule`.
    pub fn validate(&self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        validate_entry(entry).map_err(LedgerError::from)
    }

    /// Stores a new entry.
    ///
    /// The entry is validated first and always stored as `Pending`.
    pub fn save(&self, mut entry: LedgerEntry) -> Result<LedgerEntry, LedgerError> {
        self.validate(&entry)?;
        entry.status = Some(EntryStatus::Pending);

        let saved = self.repository.save(entry)?;
        if let Some(id) = saved.id {
            info!(entry_id = %id, "Ledger entry created");
        }
        Ok(saved)
    }

    /// Replaces a persisted entry with new field values.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotPersisted` if the entry has no id, or the
    /// first broken rule if it does not validate.
    pub fn update(&self, entry: LedgerEntry) -> Result<LedgerEntry, LedgerError> {
        let id = entry.id.ok_or(LedgerError::NotPersisted)?;
        self.validate(&entry)?;

        let updated = self.repository.save(entry)?;
        info!(entry_id = %id, "Ledger entry updated");
        Ok(updated)
    }

    /// Deletes a persisted entry. No validation is performed.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotPersisted` if the entry has no id.
    pub fn delete(&self, entry: &LedgerEntry) -> Result<(), LedgerError> {
        let id = entry.id.ok_or(LedgerError::NotPersisted)?;

        self.repository.delete(entry)?;
        info!(entry_id = %id, "Ledger entry deleted");
        Ok(())
    }

    /// Moves a persisted entry to `status` and stores it through [`Self::update`].
    ///
    /// Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotPersisted` if the entry has no id, plus any
    /// error `update` reports.
    pub fn set_status(
        &self,
        mut entry: LedgerEntry,
        status: EntryStatus,
    ) -> Result<LedgerEntry, LedgerError> {
        let id = entry.id.ok_or(LedgerError::NotPersisted)?;
        let previous = entry.status;
        entry.status = Some(status);

        let updated = self.update(entry)?;
        info!(
            entry_id = %id,
            from = ?previous,
            to = %status,
            "Ledger entry status changed"
        );
        Ok(updated)
    }

    /// Returns every stored entry matching the filter, in storage order.
    pub fn search(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>, LedgerError> {
        let entries = self.repository.find_by_example(filter)?;
        debug!(count = entries.len(), "Ledger entries searched");
        Ok(entries)
    }

    /// Looks up an entry by id.
    pub fn find_by_id(&self, id: LedgerEntryId) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns the signed balance of the user's effective entries.
    pub fn balance_for_user(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        let entries = self.effective_entries(user_id)?;
        let balance = net_balance(&entries);
        debug!(user_id = %user_id, %balance, "Balance computed");
        Ok(balance)
    }

    /// Returns income, expense and balance over the user's effective entries.
    pub fn summary_for_user(&self, user_id: UserId) -> Result<BalanceSummary, LedgerError> {
        let entries = self.effective_entries(user_id)?;
        Ok(BalanceSummary::from_entries(&entries))
    }

    fn effective_entries(&self, user_id: UserId) -> Result<Vec<LedgerEntry>, LedgerError> {
        let filter = EntryFilter::new()
            .with_owner(user_id)
            .with_status(EntryStatus::Effective);
        Ok(self.repository.find_by_example(&filter)?)
    }
}
