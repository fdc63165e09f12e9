//! In-memory storage for users and images.

use parking_lot::RwLock;
use smart_stock_types::{seed, Image, RecordId, User};
use std::collections::HashMap;

use crate::{ResolveError, Result};

/// In-memory store for users and images.
///
/// Both collections live behind a single lock so that every
/// check-then-append runs atomically with respect to other requests.
/// Records are only ever appended; insertion order is preserved.
#[derive(Default)]
pub struct CollectionStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    /// User positions indexed by id.
    user_index: HashMap<RecordId, usize>,
    images: Vec<Image>,
    /// Image positions indexed by id.
    image_index: HashMap<RecordId, usize>,
}

impl Collections {
    fn push_user(&mut self, user: User) {
        self.user_index.insert(user.id.clone(), self.users.len());
        self.users.push(user);
    }

    fn push_image(&mut self, image: Image) {
        self.image_index.insert(image.id.clone(), self.images.len());
        self.images.push(image);
    }

    fn user(&self, id: &RecordId) -> Option<&User> {
        self.user_index.get(id).and_then(|&i| self.users.get(i))
    }
}

impl CollectionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the seed users and images.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            seed::users().into_iter().for_each(|u| inner.push_user(u));
            seed::images().into_iter().for_each(|i| inner.push_image(i));
        }
        store
    }

    /// Appends a user, rejecting an email that is already registered.
    pub fn insert_user(&self, user: User) -> Result<User> {
        let mut inner = self.inner.write();

        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(ResolveError::EmailTaken { email: user.email });
        }

        inner.push_user(user.clone());
        Ok(user)
    }

    /// Appends an image, rejecting an author that does not exist.
    pub fn insert_image(&self, image: Image) -> Result<Image> {
        let mut inner = self.inner.write();

        if inner.user(&image.author).is_none() {
            return Err(ResolveError::AuthorNotFound {
                author: image.author,
            });
        }

        inner.push_image(image.clone());
        Ok(image)
    }

    /// Gets a user by id.
    pub fn user(&self, id: &RecordId) -> Option<User> {
        self.inner.read().user(id).cloned()
    }

    /// Gets an image by id.
    pub fn image(&self, id: &RecordId) -> Option<Image> {
        let inner = self.inner.read();
        inner
            .image_index
            .get(id)
            .and_then(|&i| inner.images.get(i))
            .cloned()
    }

    /// Lists users matching a predicate, in insertion order.
    pub fn filter_users(&self, predicate: impl Fn(&User) -> bool) -> Vec<User> {
        self.inner
            .read()
            .users
            .iter()
            .filter(|u| predicate(u))
            .cloned()
            .collect()
    }

    /// Lists images matching a predicate, in insertion order.
    pub fn filter_images(&self, predicate: impl Fn(&Image) -> bool) -> Vec<Image> {
        self.inner
            .read()
            .images
            .iter()
            .filter(|i| predicate(i))
            .cloned()
            .collect()
    }

    /// Lists all users.
    pub fn users(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    /// Lists all images.
    pub fn images(&self) -> Vec<Image> {
        self.inner.read().images.clone()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.inner.read().users.len()
    }

    /// Number of stored images.
    pub fn image_count(&self) -> usize {
        self.inner.read().images.len()
    }
}
