//! User resource handlers.
//!
//! ```text
//! GET    /user
//! GET    /user/{id}
//! POST   /user/create
//! PUT    /user/update/{id}
//! DELETE /user/delete/{id}
//! ```
//!
//! Handlers only extract parameters and delegate to the record access
//! layer; all lifecycle rules live in [`crate::domain::UserService`].

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for `POST /user/create`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
        }
    }
}

/// Request payload for `PUT /user/update/{id}`. Omitted fields retain
/// their stored values.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
        }
    }
}

/// User record as returned to clients. The stored password is never
/// serialised.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            email: value.email().to_owned(),
        }
    }
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All stored users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "Store-assigned user identifier")),
    responses(
        (status = 200, description = "The requested user", body = UserResponse),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "No user with this identifier", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get(UserId::new(path.into_inner())).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Create a user. The store assigns the identifier.
#[utoipa::path(
    post,
    path = "/user/create",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user including assigned id", body = UserResponse),
        (status = 400, description = "Body is malformed or missing fields", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Merge the supplied fields into an existing user.
#[utoipa::path(
    put,
    path = "/user/update/{id}",
    params(("id" = i32, Path, description = "Store-assigned user identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Identifier or body is invalid", body = Error),
        (status = 404, description = "No user with this identifier", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/update/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users
        .update(UserId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user and return a plain-text confirmation.
#[utoipa::path(
    delete,
    path = "/user/delete/{id}",
    params(("id" = i32, Path, description = "Store-assigned user identifier")),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "No user with this identifier", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUserById"
)]
#[delete("/delete/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let confirmation = state.users.delete(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(confirmation))
}

#[cfg(test)]
mod tests;
