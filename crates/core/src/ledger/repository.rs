//! Storage contract for ledger entries.

use ledgerly_shared::StorageError;
use ledgerly_shared::types::LedgerEntryId;

use super::entry::LedgerEntry;
use super::filter::EntryFilter;

/// Durable storage for ledger entries.
///
/// Each call is expected to be atomic. Implementations decide the order of
/// returned entries.
#[cfg_attr(test, mockall::automock)]
pub trait LedgerRepository: Send + Sync {
    /// Inserts or replaces an entry, assigning an id when it has none.
    fn save(&self, entry: LedgerEntry) -> Result<LedgerEntry, StorageError>;

    /// Removes a persisted entry.
    fn delete(&self, entry: &LedgerEntry) -> Result<(), StorageError>;

    /// Looks up an entry by id.
    fn find_by_id(&self, id: LedgerEntryId) -> Result<Option<LedgerEntry>, StorageError>;

    /// Returns every entry matching the filter.
    fn find_by_example(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>, StorageError>;
}
