//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they depend only on
//! the record access layer and remain testable without I/O.

use crate::domain::UserService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
}

impl HttpState {
    /// Construct state around a record access service.
    #[must_use]
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}
