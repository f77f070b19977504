//! Core business logic for Ledgerly.
//!
//! This crate contains pure business logic with no web or database dependencies.
//! Storage is reached only through the repository traits defined here.
//!
//! # Modules
//!
//! - `ledger` - Entry validation, status changes, filtering and balances
//! - `user` - Registration and authentication of entry owners
//! - `auth` - Password hashing

pub mod auth;
pub mod ledger;
pub mod user;
