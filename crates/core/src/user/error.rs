//! User error types.

use ledgerly_shared::{AppError, StorageError};
use thiserror::Error;

use crate::auth::PasswordError;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Another user already registered this e-mail.
    #[error("Já existe um usuario cadastrado com este email.")]
    EmailTaken,

    /// No user with the given e-mail.
    #[error("Usuário não existe.")]
    NotFound,

    /// The password does not match the stored hash.
    #[error("Senha inválida.")]
    InvalidPassword,

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::NotFound => "USER_NOT_FOUND",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::Password(_) => "PASSWORD_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::EmailTaken | Self::NotFound | Self::InvalidPassword => 400,
            Self::Storage(StorageError::Unavailable(_)) => 503,
            Self::Password(_) | Self::Storage(_) => 500,
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Storage(storage) => Self::Storage(storage),
            UserError::Password(password) => Self::Internal(password.to_string()),
            other => Self::BusinessRule(other.to_string()),
        }
    }
}
