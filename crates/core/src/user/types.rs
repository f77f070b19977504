//! User domain types.

use ledgerly_shared::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unset until the user is first persisted.
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// Login e-mail, unique across users.
    pub email: String,
    /// Argon2id PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}
