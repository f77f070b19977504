//! Storage contract for users.

use ledgerly_shared::StorageError;
use ledgerly_shared::types::UserId;

use super::types::User;

/// Durable storage for users.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Inserts or replaces a user, assigning an id when it has none.
    fn save(&self, user: User) -> Result<User, StorageError>;

    /// Looks up a user by id.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Looks up a user by e-mail.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Returns true if some user already has this e-mail.
    fn exists_by_email(&self, email: &str) -> Result<bool, StorageError>;
}
