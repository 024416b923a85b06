//! Record access layer: existence checks around the repository port.
//!
//! Every operation re-reads from the store before acting; no state is
//! cached between calls. The only recognised failure is "record not
//! found" — everything else surfaces as a service-unavailable or
//! internal error.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Message returned for every missing-record failure.
const USER_NOT_FOUND: &str = "User not found";

/// Confirmation body returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "User Deleted";

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

/// CRUD operations over the user repository port.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List every stored record in store-default order.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(map_persistence_error)
    }

    /// Fetch a record by identifier.
    pub async fn get(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }

    /// Persist a new record and return it with its assigned identifier.
    pub async fn create(&self, new_user: NewUser) -> Result<User, Error> {
        let user = self
            .repository
            .insert(new_user)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = user.id().get(), "user created");
        Ok(user)
    }

    /// Merge the supplied fields into an existing record.
    ///
    /// Omitted fields retain their stored values. The merge executes as a
    /// single statement in the repository, so a concurrent delete cannot
    /// be resurrected: it simply surfaces as not-found here.
    pub async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        self.repository
            .update(id, changes)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }

    /// Delete a record and return the confirmation message.
    ///
    /// A repeat delete on the same identifier fails with not-found rather
    /// than succeeding silently.
    pub async fn delete(&self, id: UserId) -> Result<&'static str, Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(user_not_found());
        }
        debug!(user_id = id.get(), "user deleted");
        Ok(DELETE_CONFIRMATION)
    }
}
