//! Users API handlers.
//!
//! ```text
//! GET /get-users
//! POST /create-user {"username":"ada","email":"ada@example.com"}
//! GET /delete-user/{targetId}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Email, NewUser, UserId, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::json::MessageResponse;
use crate::inbound::http::schemas::{ErrorSchema, ListUsersSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    EMAIL, USERNAME, map_user_validation_error, require_present, require_string,
};

/// Body returned by `GET /get-users` when the store is empty.
pub const NO_USERS_MESSAGE: &str = "No users found";
/// Body returned after a successful delete.
pub const USER_REMOVED_MESSAGE: &str = "User successfully removed";

/// Create-user request body for `POST /create-user`.
///
/// Fields stay untyped so missing, falsy and non-string values can each be
/// reported with their own message. Only JSON objects decode; arrays and
/// scalars are rejected by the extractor.
///
/// Example JSON:
/// `{"username":"ada","email":"ada@example.com"}`
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct CreateUserRequest {
    #[schema(value_type = String, example = "ada")]
    pub username: Option<Value>,
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: Option<Value>,
}

impl From<Map<String, Value>> for CreateUserRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            username: body.remove("username"),
            email: body.remove("email"),
        }
    }
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = crate::domain::Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        require_present(value.username.as_ref(), value.email.as_ref())?;
        let username = require_string(value.username, USERNAME)?;
        let username = Username::new(username).map_err(map_user_validation_error)?;
        let email = require_string(value.email, EMAIL)?;
        let email = Email::new(email).map_err(map_user_validation_error)?;
        Ok(NewUser { username, email })
    }
}

/// List registered users.
///
/// An empty store answers with a message object rather than an empty array;
/// existing clients depend on that shape.
#[utoipa::path(
    get,
    path = "/get-users",
    responses(
        (status = 200, description = "Registered users, or a message object when none exist", body = ListUsersSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/get-users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users_query.list_users().await?;
    if users.is_empty() {
        return Ok(HttpResponse::Ok().json(MessageResponse::new(NO_USERS_MESSAGE)));
    }
    Ok(HttpResponse::Ok().json(users))
}

/// Register a user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/create-user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username or email already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create-user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = NewUser::try_from(payload.into_inner())?;
    let user = state.users.create_user(request).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Remove a user by identifier.
///
/// The route accepts an empty trailing segment so `/delete-user/` reaches the
/// handler and is rejected as a bad request rather than an unknown route.
#[utoipa::path(
    get,
    path = "/delete-user/{targetId}",
    params(("targetId" = String, Path, description = "Identifier of the user to remove")),
    responses(
        (status = 200, description = "User removed", body = MessageResponse),
        (status = 400, description = "Missing identifier", body = ErrorSchema),
        (status = 404, description = "No user with that identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[get("/delete-user/{targetId:[^/]*}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    target_id: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = UserId::new(target_id.into_inner()).map_err(map_user_validation_error)?;
    state.users.delete_user(&id).await?;
    Ok(web::Json(MessageResponse::new(USER_REMOVED_MESSAGE)))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
