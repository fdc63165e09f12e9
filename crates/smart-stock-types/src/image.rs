//! Image records.

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// An image posted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier.
    pub id: RecordId,
    /// Image title.
    pub title: String,
    /// Id of the authoring [`User`](crate::User).
    pub author: RecordId,
    /// Whether the image is publicly listed.
    pub published: bool,
    /// Comments, in posting order.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Like counter, unset until someone likes the image.
    #[serde(default)]
    pub likes: Option<i32>,
}

impl Image {
    /// Creates a new image with a freshly generated id, no comments and no likes.
    pub fn new(title: impl Into<String>, author: impl Into<RecordId>, published: bool) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            author: author.into(),
            published,
            comments: Vec::new(),
            likes: None,
        }
    }

    /// Overrides the id.
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the like counter.
    pub fn with_likes(mut self, likes: i32) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Returns true if the image was authored by the given user id.
    pub fn is_authored_by(&self, user_id: &RecordId) -> bool {
        self.author == *user_id
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle` must already be lowercase.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}
