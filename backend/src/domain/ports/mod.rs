//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UsersCommand`], [`UsersQuery`]) are called by inbound
//! adapters. The driven port ([`UserRepository`]) is implemented by outbound
//! persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UniqueUserField, UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
