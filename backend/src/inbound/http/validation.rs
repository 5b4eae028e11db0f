//! Validation of the untyped create-user payload.
//!
//! Fields arrive as raw JSON values. A field counts as missing when it is
//! absent or falsy (`null`, `false`, `0`, `""`); any other non-string value is
//! a type error. Blank strings are caught by the domain newtypes and mapped
//! here.

use serde_json::{Value, json};

use crate::domain::{Error, UserValidationError};

/// Message for an absent or falsy `username` or `email`.
pub const REQUIRED_MESSAGE: &str = "Both username and email are required";
/// Message for a `username` or `email` that is blank after trimming.
pub const EMPTY_MESSAGE: &str = "Both username and email cannot be empty";
/// Message for a truthy `username` or `email` that is not a string.
pub const NOT_STRING_MESSAGE: &str = "Both username and email must be strings";
/// Message for an empty `targetId` path segment.
pub const USER_ID_REQUIRED_MESSAGE: &str = "User ID is required";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidType,
    EmptyField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::EmptyField => "empty_field",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USERNAME: FieldName = FieldName::new("username");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const TARGET_ID: FieldName = FieldName::new("targetId");

fn field_error(field: FieldName, message: &str, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n == 0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Require both fields to be present and truthy, checking `username` first.
pub(crate) fn require_present(username: Option<&Value>, email: Option<&Value>) -> Result<(), Error> {
    if is_falsy(username) {
        return Err(field_error(USERNAME, REQUIRED_MESSAGE, ErrorCode::MissingField));
    }
    if is_falsy(email) {
        return Err(field_error(EMAIL, REQUIRED_MESSAGE, ErrorCode::MissingField));
    }
    Ok(())
}

/// Extract a string field, rejecting any other JSON type.
pub(crate) fn require_string(value: Option<Value>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) => Ok(text),
        _ => Err(field_error(field, NOT_STRING_MESSAGE, ErrorCode::InvalidType)),
    }
}

/// Map domain field validation failures onto client-facing errors.
pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyUsername => {
            field_error(USERNAME, EMPTY_MESSAGE, ErrorCode::EmptyField)
        }
        UserValidationError::EmptyEmail => field_error(EMAIL, EMPTY_MESSAGE, ErrorCode::EmptyField),
        UserValidationError::EmptyId => field_error(
            TARGET_ID,
            USER_ID_REQUIRED_MESSAGE,
            ErrorCode::MissingField,
        ),
    }
}
