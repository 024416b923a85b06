//! Shared test doubles for service and endpoint tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

/// Seeded record used across tests.
pub(crate) fn john() -> User {
    User::new(UserId::new(1), "John Doe", "john.doe@example.com", "secret")
}

struct InMemoryState {
    users: Vec<User>,
    next_id: i32,
    failure: Option<UserPersistenceError>,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
            failure: None,
        }
    }
}

/// In-memory stand-in for the Diesel adapter with the same merge and
/// delete semantics: omitted fields retain their stored values, and a
/// missing row reads as `None`/`false` rather than an error.
#[derive(Default)]
pub(crate) struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryUserRepository {
    pub(crate) fn seeded(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id().get()).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(InMemoryState {
                users,
                next_id,
                failure: None,
            }),
        }
    }

    /// Make every subsequent operation fail with the given error.
    pub(crate) fn fail_with(&self, failure: UserPersistenceError) {
        self.state.lock().expect("state lock").failure = Some(failure);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        Ok(state.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        Ok(state.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        let user = User::new(id, new_user.name, new_user.email, new_user.password);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        let Some(current) = state.users.iter_mut().find(|u| u.id() == id) else {
            return Ok(None);
        };
        let merged = User::new(
            id,
            changes.name.unwrap_or_else(|| current.name().to_owned()),
            changes.email.unwrap_or_else(|| current.email().to_owned()),
            changes
                .password
                .unwrap_or_else(|| current.password().to_owned()),
        );
        *current = merged.clone();
        Ok(Some(merged))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if let Some(failure) = state.failure.clone() {
            return Err(failure);
        }
        let before = state.users.len();
        state.users.retain(|u| u.id() != id);
        Ok(state.users.len() < before)
    }
}
