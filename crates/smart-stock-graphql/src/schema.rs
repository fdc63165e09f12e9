//! Query and mutation roots.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema, ID};
use smart_stock_store::{CreateUser, PostImage, Resolver};

use crate::error::to_graphql_error;
use crate::types::{ImageObject, UserObject};

/// The full GraphQL schema type for Smart Stock.
pub type StockSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema around a resolver.
pub fn build_schema(resolver: Resolver) -> StockSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolver)
        .finish()
}

/// Read operations.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Users whose name contains `query`, ignoring case. All users when omitted.
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<UserObject>> {
        let resolver = ctx.data::<Resolver>()?;
        Ok(resolver
            .list_users(query.as_deref())
            .into_iter()
            .map(UserObject)
            .collect())
    }

    /// Images whose title contains `query`, ignoring case. All images when omitted.
    async fn images(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<ImageObject>> {
        let resolver = ctx.data::<Resolver>()?;
        Ok(resolver
            .list_images(query.as_deref())
            .into_iter()
            .map(ImageObject)
            .collect())
    }
}

/// Write operations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Registers a user. Fails if the email is already taken.
    async fn create_user(&self, ctx: &Context<'_>, name: String, email: String) -> Result<UserObject> {
        let resolver = ctx.data::<Resolver>()?;
        resolver
            .create_user(CreateUser::new(name, email))
            .map(UserObject)
            .map_err(to_graphql_error)
    }

    /// Posts an image. Fails if `author` is not an existing user id.
    async fn post_image(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: ID,
        published: bool,
    ) -> Result<ImageObject> {
        let resolver = ctx.data::<Resolver>()?;
        resolver
            .post_image(PostImage::new(title, author.0, published))
            .map(ImageObject)
            .map_err(to_graphql_error)
    }
}
