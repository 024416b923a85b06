//! OpenAPI documentation configuration.
//!
//! Registers every REST endpoint and the request/response schemas. The
//! generated specification backs Swagger UI at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-service API",
        description = "CRUD HTTP interface for user records.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserResponse,
        CreateUserRequest,
        UpdateUserRequest,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
