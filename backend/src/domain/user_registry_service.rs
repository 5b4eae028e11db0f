//! User registry domain service.
//!
//! Implements the driving ports on top of a [`UserRepository`]. Create runs
//! the uniqueness checks in a fixed order (username first, then email) before
//! inserting; the store's unique constraints remain the final arbiter for
//! concurrent writers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    UniqueUserField, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, NewUser, User, UserId};

/// Client-facing message for a taken username.
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already in use";
/// Client-facing message for a taken email address.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already in use";
/// Client-facing message when the delete target does not exist.
pub const USER_NOT_FOUND_MESSAGE: &str = "Not user found";

/// User registry service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserRegistryService<R> {
    users: Arc<R>,
}

impl<R> UserRegistryService<R> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserRegistryService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::UniqueViolation { field } => Self::taken(field),
        }
    }

    fn taken(field: UniqueUserField) -> Error {
        let message = match field {
            UniqueUserField::Username => USERNAME_TAKEN_MESSAGE,
            UniqueUserField::Email => EMAIL_TAKEN_MESSAGE,
        };
        Error::conflict(message).with_details(json!({
            "field": field.to_string(),
            "code": "already_in_use",
        }))
    }
}

#[async_trait]
impl<R> UsersCommand for UserRegistryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: NewUser) -> Result<User, Error> {
        let existing_username = self
            .users
            .find_by_username(&request.username)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing_username.is_some() {
            debug!(username = %request.username, "username already registered");
            return Err(Self::taken(UniqueUserField::Username));
        }

        let existing_email = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing_email.is_some() {
            debug!("email already registered");
            return Err(Self::taken(UniqueUserField::Email));
        }

        let user = self
            .users
            .create(&request)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<u64, Error> {
        let existing = self
            .users
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing.is_none() {
            return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
        }

        let removed = self
            .users
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %id, removed, "user removed");
        Ok(removed)
    }
}

#[async_trait]
impl<R> UsersQuery for UserRegistryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list()
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_registry_service_tests.rs"]
mod tests;
