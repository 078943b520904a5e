//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Subscriber not found: {0}")]
    SubscriberNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Specification requires make, model, and year")]
    IncompleteSpecification,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use: {0}")]
    DuplicateSlug(String),

    #[error("Viewer already reacted to this post")]
    DuplicateReaction,

    // =========================================================================
    // Remote Store Failures
    // =========================================================================
    #[error("Remote read failed: {0}")]
    ReadFailure(String),

    #[error("Remote write failed: {0}")]
    WriteFailure(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::SubscriberNotFound(_) => "UNKNOWN_SUBSCRIBER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::IncompleteSpecification => "INCOMPLETE_SPECIFICATION",
            Self::DuplicateSlug(_) => "DUPLICATE_SLUG",
            Self::DuplicateReaction => "DUPLICATE_REACTION",
            Self::ReadFailure(_) => "REMOTE_READ_FAILURE",
            Self::WriteFailure(_) => "REMOTE_WRITE_FAILURE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::CommentNotFound(_) | Self::SubscriberNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::IncompleteSpecification
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateSlug(_) | Self::DuplicateReaction)
    }

    /// Check if this is a remote store failure (read or write)
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::ReadFailure(_) | Self::WriteFailure(_))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
