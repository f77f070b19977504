//! Example-based filtering of ledger entries.

use chrono::NaiveDate;
use ledgerly_shared::types::{LedgerEntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::{EntryStatus, EntryType, LedgerEntry};

/// Filter for ledger entry queries.
///
/// Every field left as `None` matches anything; every field that is set must
/// be equal on the stored entry. A blank description is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Match a single entry by id.
    pub id: Option<LedgerEntryId>,
    /// Exact description.
    pub description: Option<String>,
    /// Month of competence.
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Owning user.
    pub owner_id: Option<UserId>,
    /// Exact amount.
    pub amount: Option<Decimal>,
    /// Registration date.
    pub registration_date: Option<NaiveDate>,
    /// Income or expense.
    pub entry_type: Option<EntryType>,
    /// Lifecycle status.
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one owner.
    #[must_use]
    pub const fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restricts the filter to one status.
    #[must_use]
    pub const fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to one entry type.
    #[must_use]
    pub const fn with_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.description_criterion().is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.owner_id.is_none()
            && self.amount.is_none()
            && self.registration_date.is_none()
            && self.entry_type.is_none()
            && self.status.is_none()
    }

    /// Returns true if `entry` satisfies every criterion that is set.
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        criterion(self.id, entry.id)
            && self
                .description_criterion()
                .is_none_or(|wanted| entry.description.as_deref() == Some(wanted))
            && criterion(self.month, entry.month)
            && criterion(self.year, entry.year)
            && criterion(self.owner_id, entry.owner_id())
            && criterion(self.amount, entry.amount)
            && criterion(self.registration_date, entry.registration_date)
            && criterion(self.entry_type, entry.entry_type)
            && criterion(self.status, entry.status)
    }

    fn description_criterion(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}

fn criterion<T: PartialEq>(wanted: Option<T>, actual: Option<T>) -> bool {
    wanted.is_none_or(|wanted| actual == Some(wanted))
}

impl From<&LedgerEntry> for EntryFilter {
    /// Uses a partially filled entry as a query template.
    fn from(template: &LedgerEntry) -> Self {
        Self {
            id: template.id,
            description: template.description.clone(),
            month: template.month,
            year: template.year,
            owner_id: template.owner_id(),
            amount: template.amount,
            registration_date: template.registration_date,
            entry_type: template.entry_type,
            status: template.status,
        }
    }
}
