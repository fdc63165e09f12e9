//! Translation of resolver errors into GraphQL errors.

use async_graphql::ErrorExtensions;
use smart_stock_store::ResolveError;

/// Converts a [`ResolveError`] into a GraphQL error with an `extensions.code`.
///
/// The executor attaches the field path, which names the failed operation.
pub fn to_graphql_error(err: ResolveError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
