//! Test utilities for the user registry crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Nothing here is compiled into release builds.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{UniqueUserField, UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User, UserId, Username};

/// In-memory [`UserRepository`] mirroring the table's unique constraints.
///
/// Identifiers are random UUIDs, like the `gen_random_uuid()` column default.
///
/// # Examples
/// ```
/// use user_registry::domain::NewUser;
/// use user_registry::domain::ports::UserRepository;
/// use user_registry::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let request = NewUser::try_from_strings("ada", "ada@example.com").unwrap();
/// let user = repo.create(&request).await.unwrap();
/// assert_eq!(repo.list().await.unwrap(), vec![user]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
    failure: Option<String>,
}

impl InMemoryUserRepository {
    /// Build a repository pre-populated with users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            rows: Mutex::new(users.into_iter().collect()),
            failure: None,
        }
    }

    /// Build a repository whose every call fails with a connection error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    fn rows(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        if let Some(message) = &self.failure {
            return Err(UserPersistenceError::connection(message.clone()));
        }
        self.rows
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory store poisoned"))
    }

    fn find_where(
        &self,
        predicate: impl Fn(&User) -> bool,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.rows()?.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.find_where(|user| user.id() == id)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        self.find_where(|user| user.username() == username)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        self.find_where(|user| user.email() == email)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.rows()?.clone())
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut rows = self.rows()?;
        if rows.iter().any(|row| row.username() == &user.username) {
            return Err(UserPersistenceError::unique_violation(
                UniqueUserField::Username,
            ));
        }
        if rows.iter().any(|row| row.email() == &user.email) {
            return Err(UserPersistenceError::unique_violation(
                UniqueUserField::Email,
            ));
        }

        let id = UserId::new(Uuid::new_v4().to_string())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let created = User::new(id, user.username.clone(), user.email.clone());
        rows.push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let mut rows = self.rows()?;
        let before = rows.len();
        rows.retain(|user| user.id() != id);
        Ok(u64::try_from(before - rows.len()).unwrap_or(u64::MAX))
    }
}
