//! Common types used throughout `smart-stock`.
//!
//! This crate provides the two record kinds held by the Smart Stock
//! collection store, [`User`] and [`Image`], the opaque [`RecordId`]
//! they are keyed by, and the [seed data](seed) present at startup.

mod id;
mod image;
mod user;

pub mod seed;

pub use id::RecordId;
pub use image::Image;
pub use user::User;

/// Default path the GraphQL API is served under.
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;
