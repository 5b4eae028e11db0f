//! Driving port for user mutations.
//!
//! HTTP handlers call this port; the domain service implements it on top of
//! [`super::UserRepository`].

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Domain use-case port for creating and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user after both uniqueness checks pass.
    async fn create_user(&self, request: NewUser) -> Result<User, Error>;

    /// Remove the user with the given identifier.
    ///
    /// Returns the number of rows removed; fails with `NotFound` when no user
    /// carries the identifier.
    async fn delete_user(&self, id: &UserId) -> Result<u64, Error>;
}
