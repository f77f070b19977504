//! User balance calculations.
//!
//! Only `Effective` entries contribute. Income adds its amount, expense
//! subtracts it; the stored sign of the amount is never used.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::{EntryType, LedgerEntry};

/// Income, expense and net balance over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Sum of effective income amounts.
    pub income: Decimal,
    /// Sum of effective expense amounts.
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

impl BalanceSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an income amount.
    pub fn add_income(&mut self, amount: Decimal) {
        self.income += amount;
        self.balance = self.income - self.expense;
    }

    /// Adds an expense amount.
    pub fn add_expense(&mut self, amount: Decimal) {
        self.expense += amount;
        self.balance = self.income - self.expense;
    }

    /// Folds one entry into the summary.
    ///
    /// Entries that are not effective, or that lack an amount or a type, are skipped.
    pub fn apply(&mut self, entry: &LedgerEntry) {
        if !entry.status.is_some_and(|status| status.counts_toward_balance()) {
            return;
        }
        let (Some(amount), Some(entry_type)) = (entry.amount, entry.entry_type) else {
            return;
        };
        match entry_type {
            EntryType::Income => self.add_income(amount),
            EntryType::Expense => self.add_expense(amount),
        }
    }

    /// Summarizes a set of entries.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> Self {
        let mut summary = Self::new();
        for entry in entries {
            summary.apply(entry);
        }
        summary
    }
}

/// Returns the signed balance of a set of entries.
#[must_use]
pub fn net_balance<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> Decimal {
    BalanceSummary::from_entries(entries).balance
}
