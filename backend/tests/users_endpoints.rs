//! End-to-end tests driving the full application against the in-memory
//! user repository.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use user_registry::domain::{TRACE_ID_HEADER, TraceId, User, UserRegistryService};
use user_registry::inbound::http::state::HttpState;
use user_registry::server::build_app;
use user_registry::test_support::InMemoryUserRepository;

const ADA_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ada() -> User {
    User::try_from_strings(ADA_ID, "ada", "ada@example.com").expect("valid user")
}

fn state_for(repository: InMemoryUserRepository) -> web::Data<HttpState> {
    let service = UserRegistryService::new(Arc::new(repository));
    web::Data::new(HttpState::from_service(Arc::new(service)))
}

async fn send<S, R>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

fn create_request(username: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/create-user")
        .set_json(json!({ "username": username, "email": email }))
}

#[rstest]
#[case("/", "Hello World")]
#[case("/ping", "pong")]
#[actix_web::test]
async fn liveness_endpoints_ignore_store_state(#[case] uri: &str, #[case] message: &str) {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::failing(
        "database offline",
    ))))
    .await;

    let (status, body) = send(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": message }));
}

#[rstest]
#[actix_web::test]
async fn create_then_list_returns_the_new_user() {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::default()))).await;

    let (status, created) = send(
        &app,
        create_request("ada", "ada@example.com").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "ada");
    assert_eq!(created["email"], "ada@example.com");
    let id = created["id"].as_str().expect("generated id");
    assert!(!id.is_empty());

    let (status, listed) = send(&app, test::TestRequest::get().uri("/get-users").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[rstest]
#[actix_web::test]
async fn empty_store_lists_the_sentinel_message() {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::default()))).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/get-users").to_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "No users found" }));
}

#[rstest]
#[case("ada", "other@example.com", "Username already in use")]
#[case("ada", "ada@example.com", "Username already in use")]
#[case("grace", "ada@example.com", "Email already in use")]
#[actix_web::test]
async fn duplicate_fields_conflict(
    ada: User,
    #[case] username: &str,
    #[case] email: &str,
    #[case] message: &str,
) {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::with_users([
        ada,
    ]))))
    .await;

    let (status, body) = send(&app, create_request(username, email).to_request()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["message"], message);
}

#[rstest]
#[case(json!({ "username": "   ", "email": "ada@example.com" }), "Both username and email cannot be empty")]
#[case(json!({ "email": "ada@example.com" }), "Both username and email are required")]
#[case(json!({ "username": "ada", "email": 7 }), "Both username and email must be strings")]
#[case(json!({ "username": " ", "email": 7 }), "Both username and email cannot be empty")]
#[actix_web::test]
async fn invalid_payloads_are_rejected_without_writes(
    #[case] payload: Value,
    #[case] message: &str,
) {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::default()))).await;

    let request = test::TestRequest::post()
        .uri("/create-user")
        .set_json(payload)
        .to_request();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], message);

    let (_, listed) = send(&app, test::TestRequest::get().uri("/get-users").to_request()).await;
    assert_eq!(listed, json!({ "message": "No users found" }));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::default()))).await;

    let request = test::TestRequest::post()
        .uri("/create-user")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn delete_removes_the_user(ada: User) {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::with_users([
        ada,
    ]))))
    .await;

    let request = test::TestRequest::get()
        .uri(&format!("/delete-user/{ADA_ID}"))
        .to_request();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User successfully removed" }));

    let (_, listed) = send(&app, test::TestRequest::get().uri("/get-users").to_request()).await;
    assert_eq!(listed, json!({ "message": "No users found" }));
}

#[rstest]
#[case("/delete-user/does-not-exist", StatusCode::NOT_FOUND, "Not user found")]
#[case("/delete-user/", StatusCode::BAD_REQUEST, "User ID is required")]
#[actix_web::test]
async fn delete_reports_missing_targets(
    ada: User,
    #[case] uri: &str,
    #[case] expected_status: StatusCode,
    #[case] message: &str,
) {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::with_users([
        ada,
    ]))))
    .await;

    let (status, body) = send(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(status, expected_status);
    assert_eq!(body["message"], message);
}

#[rstest]
#[actix_web::test]
async fn store_failures_are_redacted_and_traced() {
    let app = test::init_service(build_app(state_for(InMemoryUserRepository::failing(
        "connection refused by db-primary:5432",
    ))))
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/get-users").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    header.parse::<TraceId>().expect("trace id is a UUID");

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], header);
    assert!(body.get("details").is_none());
}
