//! User data model.
//!
//! Field newtypes enforce the non-blank invariants once, at construction, so
//! the service and adapters only ever see validated values. Values are kept
//! exactly as submitted: uniqueness is decided on the raw string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The username was empty or whitespace only.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The email was empty or whitespace only.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Opaque user identifier assigned by the store.
///
/// Any non-empty string is accepted so lookups for identifiers the store could
/// never have issued resolve to "not found" rather than a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! non_blank_string {
    ($(#[$meta:meta])* $name:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value, rejecting blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(UserValidationError::$error);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_blank_string!(
    /// Unique login-style handle chosen by the user.
    Username,
    EmptyUsername
);

non_blank_string!(
    /// Unique contact address for the user.
    Email,
    EmptyEmail
);

/// Validated input for creating a user; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Requested username.
    pub username: Username,
    /// Requested email address.
    pub email: Email,
}

impl NewUser {
    /// Build a new user request from raw strings.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::{NewUser, UserValidationError};
    ///
    /// assert!(NewUser::try_from_strings("ada", "ada@example.com").is_ok());
    /// assert_eq!(
    ///     NewUser::try_from_strings("   ", "ada@example.com"),
    ///     Err(UserValidationError::EmptyUsername),
    /// );
    /// ```
    pub fn try_from_strings(
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            email: Email::new(email)?,
        })
    }
}

/// Persisted application user.
///
/// ## Invariants
/// - `id` is non-empty.
/// - `username` and `email` are non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, username: Username, email: Email) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Fallible constructor enforcing every field invariant.
    pub fn try_from_strings(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            Username::new(username)?,
            Email::new(email)?,
        ))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    username: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            username,
            email,
        } = value;
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.username, value.email)
    }
}
