//! Domain types and the record access service.

pub mod error;
pub mod ports;
pub mod user;
pub mod users_service;

pub use error::{Error, ErrorCode};
pub use user::{NewUser, User, UserChanges, UserId};
pub use users_service::{DELETE_CONFIRMATION, UserService};
