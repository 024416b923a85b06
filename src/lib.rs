//! CRUD HTTP service for user records.
//!
//! The crate follows a hexagonal layout: `domain` holds the user entity,
//! the repository port, and the record access service; `inbound::http`
//! exposes the REST surface; `outbound::persistence` implements the port
//! against PostgreSQL via Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
