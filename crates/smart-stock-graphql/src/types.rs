//! GraphQL object types.

use async_graphql::{Context, Object, Result, ID};
use smart_stock_store::Resolver;
use smart_stock_types::{Image, User};

/// The `User` GraphQL type.
pub struct UserObject(pub User);

/// The `Image` GraphQL type.
pub struct ImageObject(pub Image);

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

impl From<Image> for ImageObject {
    fn from(image: Image) -> Self {
        Self(image)
    }
}

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    /// Images authored by this user.
    async fn images(&self, ctx: &Context<'_>) -> Result<Vec<ImageObject>> {
        let resolver = ctx.data::<Resolver>()?;
        Ok(resolver
            .user_images(&self.0)
            .into_iter()
            .map(ImageObject)
            .collect())
    }
}

#[Object(name = "Image")]
impl ImageObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// The authoring user, or null if the reference dangles.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let resolver = ctx.data::<Resolver>()?;
        Ok(resolver.image_author(&self.0).map(UserObject))
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn published(&self) -> bool {
        self.0.published
    }

    async fn comments(&self) -> Option<Vec<String>> {
        Some(self.0.comments.clone())
    }

    async fn likes(&self) -> Option<i32> {
        self.0.likes
    }
}
