//! User registration and authentication.

use ledgerly_shared::types::UserId;
use tracing::{info, warn};

use super::error::UserError;
use super::repository::UserRepository;
use super::types::{NewUser, User};
use crate::auth::{hash_password, verify_password};

/// User service over a storage backend.
#[derive(Debug, Clone)]
pub struct UserService<R> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fails if the e-mail is already registered.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmailTaken` when the e-mail is in use.
    pub fn validate_email(&self, email: &str) -> Result<(), UserError> {
        if self.repository.exists_by_email(email)? {
            return Err(UserError::EmailTaken);
        }
        Ok(())
    }

    /// Registers a new user with a hashed password.
    pub fn register(&self, input: NewUser) -> Result<User, UserError> {
        self.validate_email(&input.email)?;
        let password_hash = hash_password(&input.password)?;

        let user = self.repository.save(User {
            id: None,
            name: input.name,
            email: input.email,
            password_hash,
        })?;
        if let Some(id) = user.id {
            info!(user_id = %id, "User registered");
        }
        Ok(user)
    }

    /// Returns the user matching the e-mail and password.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` for an unknown e-mail and
    /// `UserError::InvalidPassword` for a wrong password.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)?
            .ok_or(UserError::NotFound)?;

        if !verify_password(password, &user.password_hash)? {
            warn!(email, "Authentication rejected");
            return Err(UserError::InvalidPassword);
        }
        Ok(user)
    }

    /// Looks up a user by id.
    pub fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.repository.find_by_id(id)?)
    }
}
