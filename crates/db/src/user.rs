//! In-memory user repository.

use std::sync::Arc;

use dashmap::DashMap;
use ledgerly_core::user::{User, UserRepository};
use ledgerly_shared::StorageError;
use ledgerly_shared::types::UserId;
use tracing::debug;

/// User storage held in process memory.
///
/// E-mail addresses are unique; saving a second user with a taken e-mail is rejected.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<DashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn email_owner(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.value().clone())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, mut user: User) -> Result<User, StorageError> {
        if let Some(existing) = self.email_owner(&user.email)
            && existing.id != user.id
        {
            return Err(StorageError::Rejected(format!(
                "e-mail already registered: {}",
                user.email
            )));
        }

        let id = *user.id.get_or_insert_with(UserId::new);
        self.users.insert(id, user.clone());
        debug!(user_id = %id, "Stored user");
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self.email_owner(email))
    }

    fn exists_by_email(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self.users.iter().any(|user| user.email == email))
    }
}
