//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the liveness and user endpoints from the inbound layer
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`UserSchema`]) that provide OpenAPI definitions without coupling domain
//!   types to the utoipa framework, plus the request and message bodies
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::json::MessageResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ListUsersSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Create, list and remove users with unique usernames and emails."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::hello_world,
        crate::inbound::http::health::ping,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        UserSchema,
        ListUsersSchema,
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        CreateUserRequest
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Liveness endpoints")
    )
)]
pub struct ApiDoc;
