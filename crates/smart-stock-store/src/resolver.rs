//! Resolution of schema operations against the collection store.

use smart_stock_types::{Image, User};
use std::sync::Arc;

use crate::{CollectionStore, CreateUser, PostImage, Result};

/// Maps each query, mutation and relationship field onto the store.
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<CollectionStore>,
}

impl Resolver {
    /// Creates a resolver over the given store.
    pub fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<CollectionStore> {
        &self.store
    }

    /// Lists users, optionally filtered by a case-insensitive name match.
    pub fn list_users(&self, query: Option<&str>) -> Vec<User> {
        match normalize(query) {
            None => self.store.users(),
            Some(needle) => self
                .store
                .filter_users(|u| u.name.to_lowercase().contains(&needle)),
        }
    }

    /// Lists images, optionally filtered by a case-insensitive title match.
    pub fn list_images(&self, query: Option<&str>) -> Vec<Image> {
        match normalize(query) {
            None => self.store.images(),
            Some(needle) => self.store.filter_images(|i| i.title_contains(&needle)),
        }
    }

    /// Registers a new user.
    pub fn create_user(&self, args: CreateUser) -> Result<User> {
        args.validate()?;

        let user = self
            .store
            .insert_user(User::new(args.name, args.email))
            .inspect_err(|e| tracing::debug!(error = %e, "createUser rejected"))?;

        tracing::info!(user_id = %user.id, name = %user.name, "User created");
        Ok(user)
    }

    /// Posts a new image on behalf of an existing user.
    pub fn post_image(&self, args: PostImage) -> Result<Image> {
        args.validate()?;

        let image = self
            .store
            .insert_image(Image::new(args.title, args.author, args.published))
            .inspect_err(|e| tracing::debug!(error = %e, "postImage rejected"))?;

        tracing::info!(
            image_id = %image.id,
            author = %image.author,
            published = image.published,
            "Image posted"
        );
        Ok(image)
    }

    /// Resolves the author of an image; `None` if the user no longer exists.
    pub fn image_author(&self, image: &Image) -> Option<User> {
        self.store.user(&image.author)
    }

    /// Lists the images authored by a user, in store order.
    pub fn user_images(&self, user: &User) -> Vec<Image> {
        self.store.filter_images(|i| i.is_authored_by(&user.id))
    }
}

/// Absent and empty queries both mean "no filter".
fn normalize(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}
