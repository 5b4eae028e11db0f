//! Domain primitives, ports and services.
//!
//! Purpose: define the user entity with its validated fields, the
//! transport-agnostic error taxonomy, and the use-case service that enforces
//! the registration rules. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: error payload and stable category.
//! - `User`, `UserId`, `Username`, `Email`, `NewUser`: user model.
//! - `UserRegistryService`: implementation of the driving ports.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registry_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, User, UserId, UserValidationError, Username};
pub use self::user_registry_service::UserRegistryService;
