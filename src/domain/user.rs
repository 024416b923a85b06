//! User record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw store-assigned identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is immutable once assigned by the store.
///
/// The password is carried for persistence round-trips only; the HTTP
/// layer never serialises it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: String,
}

impl User {
    /// Build a [`User`] from its stored parts.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email. Uniqueness is not enforced.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Stored password. Write-only from the client's perspective.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Fields for a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial update applied to an existing record.
///
/// `None` fields retain their stored values; the merge is shallow and
/// field-by-field. The identifier can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    /// True when no field is supplied; such an update degenerates to a
    /// plain fetch.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}
