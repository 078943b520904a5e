//! Comment service

use tracing::{info, instrument};
use uuid::Uuid;

use gearup_core::entities::Comment;
use gearup_core::value_objects::ViewerKey;

use crate::dto::{AddCommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default number of comments returned per post
const DEFAULT_COMMENT_LIMIT: i64 = 100;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a post, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, slug: &str) -> ServiceResult<Vec<CommentResponse>> {
        let post_id = self.resolve_post(slug).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_post(post_id, DEFAULT_COMMENT_LIMIT)
            .await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Add a comment from the given viewer
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        slug: &str,
        viewer_key: &ViewerKey,
        request: AddCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let post_id = self.resolve_post(slug).await?;

        let comment = Comment::new(
            Uuid::new_v4(),
            post_id,
            viewer_key.as_str().to_string(),
            request.author_name,
            request.content,
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(post_id = %post_id, comment_id = %comment.id, "Comment added");

        Ok(CommentResponse::from(&comment))
    }

    async fn resolve_post(&self, slug: &str) -> ServiceResult<Uuid> {
        let post = self
            .ctx
            .post_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", slug))?;

        Ok(post.id)
    }
}
