//! User records.

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A registered user.
///
/// Users are immutable once created. The images a user authored are not
/// stored here; they are derived from [`Image::author`](crate::Image::author).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Email address, unique among all users.
    pub email: String,
}

impl User {
    /// Creates a new user with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(RecordId::generate(), name, email)
    }

    /// Creates a user with an explicit id.
    pub fn with_id(id: impl Into<RecordId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
