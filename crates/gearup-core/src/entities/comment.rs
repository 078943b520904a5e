//! Comment entity - a reader comment on a post

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    /// Opaque author identity (the commenting viewer's key)
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Uuid,
        post_id: Uuid,
        author_id: String,
        author_name: String,
        content: String,
    ) -> Self {
        Self {
            id,
            post_id,
            author_id,
            author_name,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if comment content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
