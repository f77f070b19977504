//! In-memory ledger entry repository.

use std::sync::Arc;

use dashmap::DashMap;
use ledgerly_core::ledger::{EntryFilter, LedgerEntry, LedgerRepository};
use ledgerly_shared::StorageError;
use ledgerly_shared::types::LedgerEntryId;
use tracing::debug;

/// Ledger entry storage held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerRepository {
    entries: Arc<DashMap<LedgerEntryId, LedgerEntry>>,
}

impl InMemoryLedgerRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn save(&self, mut entry: LedgerEntry) -> Result<LedgerEntry, StorageError> {
        let id = *entry.id.get_or_insert_with(LedgerEntryId::new);
        self.entries.insert(id, entry.clone());
        debug!(entry_id = %id, "Stored ledger entry");
        Ok(entry)
    }

    fn delete(&self, entry: &LedgerEntry) -> Result<(), StorageError> {
        let id = entry
            .id
            .ok_or_else(|| StorageError::Rejected("entry has no id".to_string()))?;
        if self.entries.remove(&id).is_none() {
            debug!(entry_id = %id, "Delete of unknown ledger entry ignored");
        }
        Ok(())
    }

    fn find_by_id(&self, id: LedgerEntryId) -> Result<Option<LedgerEntry>, StorageError> {
        Ok(self.entries.get(&id).map(|entry| entry.value().clone()))
    }

    fn find_by_example(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>, StorageError> {
        let mut found: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        // v7 ids sort in creation order.
        found.sort_by_key(|entry| entry.id);
        Ok(found)
    }
}
