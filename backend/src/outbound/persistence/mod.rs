//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the user repository port backed by PostgreSQL
//! via `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows and
//!   domain types. Registration rules live in the domain service.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures map onto
//!   `UserPersistenceError`, with unique violations naming the offending
//!   column.
//!
//! # Example
//!
//! ```no_run
//! use user_registry::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
