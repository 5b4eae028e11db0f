//! User registry library modules.
//!
//! Layout follows a hexagonal split: [`domain`] holds the user model, ports
//! and registration service; [`inbound`] exposes them over HTTP; [`outbound`]
//! persists users in PostgreSQL; [`server`] wires everything into an Actix
//! application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
