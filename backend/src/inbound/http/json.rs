//! JSON body helpers shared by the HTTP handlers.
//!
//! Holds the `{ "message": ... }` body used by the liveness, list and delete
//! endpoints, and the extractor configuration that turns malformed request
//! bodies into domain `InvalidRequest` errors.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Message returned when a request body cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Single-message response body.
///
/// # Examples
/// ```
/// use user_registry::inbound::http::json::MessageResponse;
///
/// let body = serde_json::to_value(MessageResponse::new("pong")).unwrap();
/// assert_eq!(body, serde_json::json!({"message": "pong"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    /// Human-readable status message.
    #[schema(example = "pong")]
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn reject_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting undecodable JSON body");
    Error::invalid_request(INVALID_BODY_MESSAGE)
        .with_details(json!({ "code": "invalid_json" }))
        .into()
}

/// Extractor configuration mapping JSON decode failures to 400 responses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}
