//! Error types for resolver operations.

use smart_stock_types::RecordId;
use thiserror::Error;

/// Errors that can occur while resolving an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The email already belongs to an existing user.
    #[error("Email already taken: {email}")]
    EmailTaken { email: String },

    /// The referenced author does not exist.
    #[error("User not valid: {author}")]
    AuthorNotFound { author: RecordId },

    /// A required argument was empty.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ResolveError {
    /// Machine-readable error code, surfaced in API error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmailTaken { .. } => "CONFLICT",
            Self::AuthorNotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "BAD_USER_INPUT",
        }
    }
}
