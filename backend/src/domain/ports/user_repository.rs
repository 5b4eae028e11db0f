//! Driven port for user persistence adapters and their errors.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Email, NewUser, User, UserId, Username};

use super::define_port_error;

/// Unique column whose constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueUserField {
    /// The `username` unique constraint.
    Username,
    /// The `email` unique constraint.
    Email,
}

impl fmt::Display for UniqueUserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Email => f.write_str("email"),
        }
    }
}

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique constraint rejected the write.
        UniqueViolation { field: UniqueUserField } =>
            "user repository unique constraint violated on {field}",
    }
}

/// Gateway over the `users` table.
///
/// Lookups by unique field return `Ok(None)` when no row matches; only
/// infrastructure failures surface as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user whose username matches exactly.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user whose email matches exactly.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Return every stored user.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a user and return it with its store-assigned identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Delete every row matching the identifier, returning how many went.
    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError>;
}
