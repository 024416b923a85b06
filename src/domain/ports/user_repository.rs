//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Narrow persistence interface: exactly the five operations the record
/// access layer uses. Absence is signalled with `Option`/`bool`, never an
/// error; the caller decides what a missing row means.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored record in store-default order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new record and return it with its assigned identifier.
    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError>;

    /// Merge the supplied fields into the record with the given identifier
    /// as a single atomic statement. Returns `None` when no such record
    /// exists.
    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete the record with the given identifier. Returns `false` when
    /// no such record exists.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
