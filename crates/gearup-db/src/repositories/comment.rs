//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gearup_core::entities::Comment;
use gearup_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::{map_read_error, map_write_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid, limit: i64) -> RepoResult<Vec<Comment>> {
        let limit = limit.clamp(1, 200);

        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, post_id, author_id, author_name, content, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(post_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, author_id, author_name, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(&comment.author_id)
        .bind(&comment.author_name)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
