//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the hosted row-store, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Comment, Post, PostType, Reaction, ReactionKind, Specification, Subscriber};
use crate::error::DomainError;
use crate::value_objects::ViewerKey;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Filter/limit options for post listings
#[derive(Debug, Clone)]
pub struct PostQuery {
    /// Restrict to a single post type
    pub post_type: Option<PostType>,
    /// Maximum number of posts to return
    pub limit: i64,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            post_type: None,
            limit: 20,
        }
    }
}

impl PostQuery {
    /// Query for the most recent posts of one type
    #[must_use]
    pub fn of_type(post_type: PostType, limit: i64) -> Self {
        Self {
            post_type: Some(post_type),
            limit,
        }
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>>;

    /// List recent posts, newest first
    async fn find_recent(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// Find the currently featured post, if any
    async fn find_featured(&self) -> RepoResult<Option<Post>>;

    /// List every post (analytics input)
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post (attached rows cascade)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Make `id` the single featured post, clearing every other post in the
    /// same statement
    async fn set_featured(&self, id: Uuid) -> RepoResult<()>;

    /// Clear the featured flag on `id`
    async fn clear_featured(&self, id: Uuid) -> RepoResult<()>;

    /// Increment the view counter
    async fn record_view(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Result of an atomic reaction toggle: what the viewer had before, and the
/// aggregate counts after the mutation (read in the same transaction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub previous: Option<ReactionKind>,
    pub likes: i64,
    pub dislikes: i64,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the viewer's reaction on a post
    async fn find(&self, post_id: Uuid, viewer_key: &ViewerKey) -> RepoResult<Option<Reaction>>;

    /// Aggregate (likes, dislikes) counts for a post
    async fn counts(&self, post_id: Uuid) -> RepoResult<(i64, i64)>;

    /// Apply one like/dislike action atomically.
    ///
    /// Repeating the stored kind removes the row, the opposite kind switches
    /// it, and no row inserts one - all inside a single transaction keyed on
    /// the (post_id, viewer_key) unique index.
    async fn toggle(
        &self,
        post_id: Uuid,
        viewer_key: &ViewerKey,
        kind: ReactionKind,
    ) -> RepoResult<ToggleOutcome>;
}

// ============================================================================
// Specification Repository
// ============================================================================

#[async_trait]
pub trait SpecificationRepository: Send + Sync {
    /// Find the specification attached to a post
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Option<Specification>>;

    /// Insert or replace the specification for a post
    async fn upsert(&self, spec: &Specification) -> RepoResult<()>;

    /// Detach the specification from a post
    async fn delete_by_post(&self, post_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List comments on a post, newest first
    async fn find_by_post(&self, post_id: Uuid, limit: i64) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Subscriber Repository
// ============================================================================

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Find subscriber by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>>;

    /// Insert a subscriber, reactivating on email conflict
    async fn upsert(&self, subscriber: &Subscriber) -> RepoResult<()>;

    /// Deactivate a subscriber; returns false when the email is unknown
    async fn deactivate(&self, email: &str) -> RepoResult<bool>;
}
