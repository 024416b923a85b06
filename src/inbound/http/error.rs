//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into consistent JSON envelopes and status codes. The
//! extractor configurations here route actix's own deserialisation
//! failures (bad path ids, malformed bodies) through the same envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::request_id::REQUEST_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code, ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = err.request_id.as_deref() {
            redacted = redacted.with_request_id(id);
        }
        redacted
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code, ErrorCode::InternalError) {
            error!(message = %self.message, "internal error surfaced to client");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.request_id.as_deref() {
            builder.insert_header((REQUEST_ID_HEADER, id));
        }
        builder.json(redact_if_internal(self))
    }
}

/// Path extractor configuration surfacing non-integer identifiers as a
/// 400 in the shared envelope before any store access.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request("path parameters are invalid")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

/// JSON body configuration surfacing malformed or incomplete payloads as
/// a 400 in the shared envelope.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request("request body is invalid")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}
