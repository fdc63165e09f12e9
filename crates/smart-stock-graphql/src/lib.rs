//! # Smart Stock GraphQL
//!
//! The schema gateway: declares the `User` and `Image` types together with
//! the `users`/`images` queries and the `createUser`/`postImage` mutations,
//! and binds every field to a [`Resolver`](smart_stock_store::Resolver)
//! operation.
//!
//! ```graphql
//! query {
//!   images(query: "giovanni") {
//!     title
//!     author { name }
//!   }
//! }
//!
//! mutation {
//!   postImage(title: "Alps", author: "1", published: true) { id }
//! }
//! ```
//!
//! Resolver failures are returned as GraphQL errors carrying an
//! `extensions.code` of `CONFLICT`, `NOT_FOUND` or `BAD_USER_INPUT`.

#![forbid(unsafe_code)]

mod error;
mod routes;
mod schema;
mod types;

pub use error::to_graphql_error;
pub use routes::graphql_routes;
pub use schema::{build_schema, MutationRoot, QueryRoot, StockSchema};
pub use types::{ImageObject, UserObject};
