//! Typed arguments for the mutating operations.

use smart_stock_types::RecordId;

use crate::{ResolveError, Result};

/// Arguments of `createUser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl CreateUser {
    /// Creates the argument set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Presence checks; formats are not validated.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)
    }
}

/// Arguments of `postImage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostImage {
    pub title: String,
    pub author: RecordId,
    pub published: bool,
}

impl PostImage {
    /// Creates the argument set.
    pub fn new(title: impl Into<String>, author: impl Into<RecordId>, published: bool) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published,
        }
    }

    /// Presence checks on title and author.
    pub fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("author", self.author.as_str())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ResolveError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
