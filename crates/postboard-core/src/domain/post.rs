use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a titled entry with an attached image, owned by its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Absolute URL of the post's image.
    pub image_path: String,
    /// Identity of the caller that created the post. Never changes.
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to insert a post. The repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image_path: String,
    pub creator: Uuid,
}

/// Whole-record replacement of a post's mutable fields.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub image_path: String,
}

impl Post {
    /// Build a post from insert input with a freshly assigned id.
    pub fn from_new(id: Uuid, new: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: new.title,
            content: new.content,
            image_path: new.image_path,
            creator: new.creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a replacement. `id`, `creator` and `created_at` are kept.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.image_path = changes.image_path;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, caller: Uuid) -> bool {
        self.creator == caller
    }
}

/// Parse a post identifier taken from a path or form field.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))
}
