//! Liveness endpoints.
//!
//! Both handlers answer without touching the store so they stay green while
//! the database is unavailable.

use actix_web::{get, web};

use super::json::MessageResponse;

/// Greeting returned by `GET /`.
pub const HELLO_MESSAGE: &str = "Hello World";
/// Reply returned by `GET /ping`.
pub const PONG_MESSAGE: &str = "pong";

/// Root greeting.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
#[get("/")]
pub async fn hello_world() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/ping",
    tags = ["health"],
    responses((status = 200, description = "Service is alive", body = MessageResponse))
)]
#[get("/ping")]
pub async fn ping() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new(PONG_MESSAGE))
}
