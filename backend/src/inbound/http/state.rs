//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::domain::UserRegistryService;
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::test_support::InMemoryUserRepository;
    ///
    /// let service = Arc::new(UserRegistryService::new(Arc::new(
    ///     InMemoryUserRepository::default(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(users: Arc<dyn UsersCommand>, users_query: Arc<dyn UsersQuery>) -> Self {
        Self { users, users_query }
    }

    /// Build state where one service implements both driving ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersCommand + UsersQuery + 'static,
    {
        Self {
            users: service.clone(),
            users_query: service,
        }
    }
}
