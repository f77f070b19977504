//! Storage backends for Ledgerly.
//!
//! This crate provides `DashMap`-backed implementations of the repository
//! traits defined in `ledgerly-core`. Each handle is cheap to clone and all
//! clones share the same underlying store.

pub mod ledger;
pub mod user;

pub use ledger::InMemoryLedgerRepository;
pub use user::InMemoryUserRepository;
