//! Endpoint tests for the user resource, driven through the shared
//! in-memory repository so no database is required.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::UserService;
use crate::domain::ports::UserPersistenceError;
use crate::inbound::http::error::{json_config, path_config};
use crate::test_support::{InMemoryUserRepository, john};

fn test_app(
    repository: Arc<InMemoryUserRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(UserService::new(repository));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(path_config())
        .app_data(json_config())
        .service(
            web::scope("/user")
                .service(list_users)
                .service(create_user)
                .service(update_user)
                .service(delete_user)
                .service(get_user),
        )
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[actix_web::test]
async fn empty_store_lists_as_empty_array() {
    let app = actix_test::init_service(test_app(Arc::new(InMemoryUserRepository::default()))).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/user").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await, json!([]));
}

#[actix_web::test]
async fn get_returns_stored_record_without_password() {
    let repository = Arc::new(InMemoryUserRepository::seeded(vec![john()]));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/user/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let value = read_json(res).await;
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "John Doe");
    assert_eq!(value["email"], "john.doe@example.com");
    assert!(value.get("password").is_none());
}

#[actix_web::test]
async fn get_absent_id_returns_404_with_message() {
    let repository = Arc::new(InMemoryUserRepository::seeded(vec![john()]));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/user/2").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let value = read_json(res).await;
    assert_eq!(value["code"], "not_found");
    assert_eq!(value["message"], "User not found");
}

#[rstest]
#[case("/user/abc")]
#[case("/user/1.5")]
#[actix_web::test]
async fn non_integer_id_is_rejected_before_the_store(#[case] uri: &str) {
    let repository = Arc::new(InMemoryUserRepository::default());
    // A store failure would surface as 503 if the request got that far.
    repository.fail_with(UserPersistenceError::connection("unreachable"));
    let app = actix_test::init_service(test_app(repository)).await;

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let value = read_json(res).await;
    assert_eq!(value["code"], "invalid_request");
}

#[actix_web::test]
async fn create_assigns_id_and_fetch_returns_the_record() {
    let repository = Arc::new(InMemoryUserRepository::default());
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/user/create")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "password": "test",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = read_json(res).await;
    assert_eq!(created["name"], "Jane Doe");
    assert!(created.get("password").is_none());
    let id = created["id"].as_i64().expect("assigned id");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/user/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await, created);
}

#[actix_web::test]
async fn create_with_missing_field_is_rejected() {
    let app = actix_test::init_service(test_app(Arc::new(InMemoryUserRepository::default()))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/user/create")
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(res).await["code"], "invalid_request");
}

#[actix_web::test]
async fn update_merges_only_supplied_fields() {
    let repository = Arc::new(InMemoryUserRepository::seeded(vec![john()]));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/update/1")
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let value = read_json(res).await;
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "Jane Doe");
    assert_eq!(value["email"], "john.doe@example.com");
    assert!(value.get("password").is_none());
}

#[actix_web::test]
async fn update_with_empty_body_returns_the_unchanged_record() {
    let repository = Arc::new(InMemoryUserRepository::seeded(vec![john()]));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/update/1")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let value = read_json(res).await;
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "John Doe");
    assert_eq!(value["email"], "john.doe@example.com");
    assert!(value.get("password").is_none());
}

#[actix_web::test]
async fn update_absent_id_returns_404() {
    let app = actix_test::init_service(test_app(Arc::new(InMemoryUserRepository::default()))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/update/9")
            .set_json(json!({ "name": "Jane Doe" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(res).await["message"], "User not found");
}

#[actix_web::test]
async fn delete_confirms_then_record_is_gone() {
    let repository = Arc::new(InMemoryUserRepository::seeded(vec![john()]));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/user/delete/1")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = actix_test::read_body(res).await;
    assert_eq!(body, "User Deleted");

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/user/1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete is not idempotent in observation: the second attempt fails.
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/user/delete/1")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn store_failures_surface_with_redacted_internals() {
    let repository = Arc::new(InMemoryUserRepository::default());
    repository.fail_with(UserPersistenceError::query("syntax error in SELECT"));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/user").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value = read_json(res).await;
    assert_eq!(value["code"], "internal_error");
    assert_eq!(value["message"], "Internal server error");
}

#[actix_web::test]
async fn unavailable_store_surfaces_as_503() {
    let repository = Arc::new(InMemoryUserRepository::default());
    repository.fail_with(UserPersistenceError::connection("pool checkout timed out"));
    let app = actix_test::init_service(test_app(repository)).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/user").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(read_json(res).await["code"], "service_unavailable");
}
