//! Users that own ledger entries.
//!
//! Registration enforces unique e-mail addresses; authentication checks an
//! e-mail and password pair against the stored Argon2 hash.

pub mod error;
pub mod repository;
pub mod service;
pub mod types;

pub use error::UserError;
pub use repository::UserRepository;
pub use service::UserService;
pub use types::{NewUser, User};
