//! Property-based tests for ledger entry validation rules.

use ledgerly_shared::types::UserId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{EntryStatus, EntryType, LedgerEntry, OwnerRef};
use super::validation::{RuleViolation, validate_entry};

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

fn status_strategy() -> impl Strategy<Value = Option<EntryStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(EntryStatus::Pending)),
        Just(Some(EntryStatus::Effective)),
        Just(Some(EntryStatus::Canceled)),
    ]
}

/// Any entry at all, each field independently present or absent and valid or not.
fn arbitrary_entry() -> impl Strategy<Value = LedgerEntry> {
    (
        prop::option::of(prop_oneof!["[a-zA-Z ]{1,20}", Just(String::new()), Just("  ".to_string())]),
        prop::option::of(-5i32..20),
        prop::option::of(0i32..12_000),
        prop::option::of(any::<bool>()),
        prop::option::of(prop_oneof![positive_amount(), non_positive_amount()]),
        prop::option::of(entry_type_strategy()),
        status_strategy(),
    )
        .prop_map(
            |(description, month, year, owner_has_id, amount, entry_type, status)| LedgerEntry {
                id: None,
                description,
                month,
                year,
                owner: owner_has_id.map(|has_id| {
                    if has_id {
                        OwnerRef::new(UserId::new())
                    } else {
                        OwnerRef::unsaved()
                    }
                }),
                amount,
                registration_date: None,
                entry_type,
                status,
            },
        )
}

/// Independent, rule-by-rule oracle for the expected first violation.
fn expected_violation(entry: &LedgerEntry) -> Option<RuleViolation> {
    let description_ok = matches!(&entry.description, Some(d) if !d.trim().is_empty());
    let month_ok = matches!(entry.month, Some(m) if (1..=12).contains(&m));
    let year_ok = matches!(entry.year, Some(y) if (1900..=9999).contains(&y));
    let owner_ok = matches!(entry.owner, Some(OwnerRef { id: Some(_) }));
    let amount_ok = matches!(entry.amount, Some(a) if a > Decimal::ZERO);
    let type_ok = entry.entry_type.is_some();

    [
        (description_ok, RuleViolation::InvalidDescription),
        (month_ok, RuleViolation::InvalidMonth),
        (year_ok, RuleViolation::InvalidYear),
        (owner_ok, RuleViolation::MissingOwner),
        (amount_ok, RuleViolation::InvalidAmount),
        (type_ok, RuleViolation::MissingEntryType),
    ]
    .into_iter()
    .find(|(ok, _)| !ok)
    .map(|(_, violation)| violation)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The reported violation is always the first failing rule in order.
    #[test]
    fn prop_first_failing_rule_reported(entry in arbitrary_entry()) {
        let expected = expected_violation(&entry);
        let result = validate_entry(&entry);
        prop_assert_eq!(result.err(), expected);
    }

    /// Validation is pure: repeated calls agree.
    #[test]
    fn prop_validation_is_idempotent(entry in arbitrary_entry()) {
        let snapshot = entry.clone();
        let first = validate_entry(&entry);
        let second = validate_entry(&entry);
        prop_assert_eq!(first, second);
        prop_assert_eq!(entry, snapshot);
    }

    /// Fully valid entries always pass, whatever their status.
    #[test]
    fn prop_valid_entries_accepted(
        description in "[a-zA-Z]{1,20}",
        month in 1i32..=12,
        year in 1900i32..=9999,
        amount in positive_amount(),
        entry_type in entry_type_strategy(),
        status in status_strategy(),
    ) {
        let entry = LedgerEntry {
            id: None,
            description: Some(description),
            month: Some(month),
            year: Some(year),
            owner: Some(OwnerRef::new(UserId::new())),
            amount: Some(amount),
            registration_date: None,
            entry_type: Some(entry_type),
            status,
        };
        prop_assert!(validate_entry(&entry).is_ok());
    }

    /// Non-positive amounts are rejected once every earlier rule passes.
    #[test]
    fn prop_non_positive_amount_rejected(amount in non_positive_amount()) {
        let entry = LedgerEntry {
            id: None,
            description: Some("Groceries".to_string()),
            month: Some(6),
            year: Some(2024),
            owner: Some(OwnerRef::new(UserId::new())),
            amount: Some(amount),
            registration_date: None,
            entry_type: Some(EntryType::Expense),
            status: None,
        };
        prop_assert_eq!(validate_entry(&entry), Err(RuleViolation::InvalidAmount));
    }
}
