//! In-memory storage and relational resolution for Smart Stock.
//!
//! The [`CollectionStore`] owns the two ordered collections (users and
//! images). The [`Resolver`] maps each schema operation onto reads and
//! appends against that store, returning [`ResolveError`] for business
//! failures instead of panicking.

mod error;
mod params;
mod resolver;
mod store;

pub use error::ResolveError;
pub use params::{CreateUser, PostImage};
pub use resolver::Resolver;
pub use store::CollectionStore;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
