//! Server construction and middleware wiring.

mod config;

pub use config::{
    DEFAULT_HOST, DEFAULT_PORT, FALLBACK_DATABASE_URL_ENV, ServerConfig, ServerSettings,
};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UserRegistryService;
use crate::inbound::http::health::{hello_world, ping};
use crate::inbound::http::json::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, list_users};
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Wire the Diesel repository into the registry service and expose it
/// through both driving ports.
pub fn build_http_state(pool: DbPool) -> HttpState {
    let repository = Arc::new(DieselUserRepository::new(pool));
    HttpState::from_service(Arc::new(UserRegistryService::new(repository)))
}

/// Build the application with every route, the trace middleware and the
/// JSON extractor configuration.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use user_registry::domain::UserRegistryService;
/// use user_registry::inbound::http::state::HttpState;
/// use user_registry::server::build_app;
/// use user_registry::test_support::InMemoryUserRepository;
///
/// let service = UserRegistryService::new(Arc::new(InMemoryUserRepository::default()));
/// let state = web::Data::new(HttpState::from_service(Arc::new(service)));
/// let _app = build_app(state);
/// ```
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(hello_world)
        .service(ping)
        .service(list_users)
        .service(create_user)
        .service(delete_user);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
