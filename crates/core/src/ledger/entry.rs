//! Ledger entry domain types.

use std::fmt;

use chrono::NaiveDate;
use ledgerly_shared::types::{LedgerEntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an entry brings money in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses a type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Applies the sign of this type to an unsigned amount.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a ledger entry.
///
/// Any status may move to any other; only `Effective` entries count toward a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Recorded but not yet settled.
    Pending,
    /// Settled; contributes to the owner's balance.
    Effective,
    /// Called off.
    Canceled,
}

impl EntryStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Effective => "effective",
            Self::Canceled => "canceled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "effective" => Some(Self::Effective),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Returns true if entries in this status count toward a balance.
    #[must_use]
    pub fn counts_toward_balance(&self) -> bool {
        matches!(self, Self::Effective)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference from an entry to the user that owns it.
///
/// A reference without an id points at a user that was never persisted
/// and is treated as if no owner had been given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Identifier of the owning user, if it has one.
    pub id: Option<UserId>,
}

impl OwnerRef {
    /// Creates a reference to a persisted user.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self { id: Some(id) }
    }

    /// Creates a reference to a user that has no identifier yet.
    #[must_use]
    pub const fn unsaved() -> Self {
        Self { id: None }
    }
}

/// A single income or expense record owned by a user.
///
/// Every field is optional so that partially filled entries can be represented
/// and rejected by validation rather than by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unset until the entry is first persisted.
    pub id: Option<LedgerEntryId>,
    /// Free-text description.
    pub description: Option<String>,
    /// Month of competence (1-12).
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Owning user.
    pub owner: Option<OwnerRef>,
    /// Always positive; the sign comes from `entry_type`.
    pub amount: Option<Decimal>,
    /// Date the entry was registered.
    pub registration_date: Option<NaiveDate>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    /// Current lifecycle status.
    pub status: Option<EntryStatus>,
}

/// Caller-supplied fields for a new ledger entry.
#[derive(Debug, Clone, Default)]
pub struct NewLedgerEntry {
    /// Free-text description.
    pub description: Option<String>,
    /// Month of competence.
    pub month: Option<i32>,
    /// Year of competence.
    pub year: Option<i32>,
    /// Owning user.
    pub owner_id: Option<UserId>,
    /// Entry amount.
    pub amount: Option<Decimal>,
    /// Income or expense.
    pub entry_type: Option<EntryType>,
}

impl LedgerEntry {
    /// Builds a new, not yet persisted entry.
    ///
    /// The status is always `Pending` and the registration date is `today`,
    /// whatever the caller asked for.
    #[must_use]
    pub fn create(input: NewLedgerEntry, today: NaiveDate) -> Self {
        Self {
            id: None,
            description: input.description,
            month: input.month,
            year: input.year,
            owner: input.owner_id.map(OwnerRef::new),
            amount: input.amount,
            registration_date: Some(today),
            entry_type: input.entry_type,
            status: Some(EntryStatus::Pending),
        }
    }

    /// Returns true once the entry has been assigned an identity by storage.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns the id of the owning user, if both the owner and its id are set.
    #[must_use]
    pub fn owner_id(&self) -> Option<UserId> {
        self.owner.and_then(|owner| owner.id)
    }

    /// Returns the signed contribution of this entry, ignoring its status.
    ///
    /// `None` when either the amount or the type is missing.
    #[must_use]
    pub fn signed_amount(&self) -> Option<Decimal> {
        Some(self.entry_type?.signed(self.amount?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_create_forces_pending_and_today() {
        let owner = UserId::new();
        let entry = LedgerEntry::create(
            NewLedgerEntry {
                description: Some("Salary".to_string()),
                month: Some(3),
                year: Some(2024),
                owner_id: Some(owner),
                amount: Some(dec!(1500)),
                entry_type: Some(EntryType::Income),
            },
            today(),
        );

        assert!(!entry.is_persisted());
        assert_eq!(entry.status, Some(EntryStatus::Pending));
        assert_eq!(entry.registration_date, Some(today()));
        assert_eq!(entry.owner_id(), Some(owner));
    }

    #[test]
    fn test_owner_without_id_is_not_an_owner() {
        let entry = LedgerEntry {
            owner: Some(OwnerRef::unsaved()),
            ..LedgerEntry::default()
        };
        assert_eq!(entry.owner_id(), None);
    }

    #[test]
    fn test_signed_amount() {
        let mut entry = LedgerEntry {
            amount: Some(dec!(30)),
            entry_type: Some(EntryType::Expense),
            ..LedgerEntry::default()
        };
        assert_eq!(entry.signed_amount(), Some(dec!(-30)));

        entry.entry_type = Some(EntryType::Income);
        assert_eq!(entry.signed_amount(), Some(dec!(30)));

        entry.entry_type = None;
        assert_eq!(entry.signed_amount(), None);
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!(EntryStatus::parse("EFFECTIVE"), Some(EntryStatus::Effective));
        assert_eq!(EntryStatus::parse("canceled"), Some(EntryStatus::Canceled));
        assert_eq!(EntryStatus::parse("Pending"), Some(EntryStatus::Pending));
        assert_eq!(EntryStatus::parse("posted"), None);
        assert_eq!(format!("{}", EntryStatus::Effective), "effective");
    }

    #[test]
    fn test_type_parse_and_display() {
        assert_eq!(EntryType::parse("INCOME"), Some(EntryType::Income));
        assert_eq!(EntryType::parse("expense"), Some(EntryType::Expense));
        assert_eq!(EntryType::parse("debit"), None);
        assert_eq!(format!("{}", EntryType::Expense), "expense");
    }

    #[test]
    fn test_only_effective_counts() {
        assert!(EntryStatus::Effective.counts_toward_balance());
        assert!(!EntryStatus::Pending.counts_toward_balance());
        assert!(!EntryStatus::Canceled.counts_toward_balance());
    }

    #[test]
    fn test_serde_shape() {
        let entry = LedgerEntry {
            entry_type: Some(EntryType::Income),
            status: Some(EntryStatus::Effective),
            amount: Some(dec!(10.50)),
            ..LedgerEntry::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["status"], "effective");
        assert_eq!(json["amount"], "10.50");
    }
}
