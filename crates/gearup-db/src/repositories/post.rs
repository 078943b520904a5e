//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gearup_core::entities::Post;
use gearup_core::traits::{PostQuery, PostRepository, RepoResult};
use gearup_core::DomainError;

use crate::models::PostModel;

use super::error::{map_read_error, map_unique_violation, map_write_error};

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, image_url, author, categories, \
     meta_description, post_type, views, reading_time_minutes, featured, \
     created_at, updated_at, published_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let limit = query.limit.clamp(1, 100);

        let results = match query.post_type {
            Some(post_type) => {
                let sql = format!(
                    "SELECT {POST_COLUMNS} FROM posts \
                     WHERE post_type = $1 \
                     ORDER BY published_at DESC NULLS LAST \
                     LIMIT $2"
                );
                sqlx::query_as::<_, PostModel>(&sql)
                    .bind(post_type.as_str())
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "SELECT {POST_COLUMNS} FROM posts \
                     ORDER BY created_at DESC \
                     LIMIT $1"
                );
                sqlx::query_as::<_, PostModel>(&sql)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_read_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_featured(&self) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE featured = TRUE LIMIT 1");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC");
        let results = sqlx::query_as::<_, PostModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, slug = %post.slug))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id, title, slug, content, excerpt, image_url, author, categories,
                meta_description, post_type, views, reading_time_minutes, featured,
                created_at, updated_at, published_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.image_url)
        .bind(&post.author)
        .bind(&post.categories)
        .bind(&post.meta_description)
        .bind(post.post_type.as_str())
        .bind(post.views)
        .bind(post.reading_time_minutes)
        .bind(post.featured)
        .bind(post.created_at)
        .bind(post.updated_at)
        .bind(post.published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSlug(post.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2, slug = $3, content = $4, excerpt = $5, image_url = $6,
                author = $7, categories = $8, meta_description = $9, post_type = $10,
                reading_time_minutes = $11, featured = $12, published_at = $13,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.image_url)
        .bind(&post.author)
        .bind(&post.categories)
        .bind(&post.meta_description)
        .bind(post.post_type.as_str())
        .bind(post.reading_time_minutes)
        .bind(post.featured)
        .bind(post.published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSlug(post.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_featured(&self, id: Uuid) -> RepoResult<()> {
        // One statement keeps the at-most-one-featured invariant transactional:
        // the target row becomes TRUE and every other row becomes FALSE.
        sqlx::query("UPDATE posts SET featured = (id = $1)")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_featured(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("UPDATE posts SET featured = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_view(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}
