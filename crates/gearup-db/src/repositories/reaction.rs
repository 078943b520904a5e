//! PostgreSQL implementation of ReactionRepository
//!
//! The toggle runs as a single transaction keyed on the (post_id, viewer_key)
//! unique index: the viewer's current row is locked, mutated according to the
//! requested kind, and the aggregate counts are re-read before commit. Two
//! tabs racing on the same viewer key serialize on the row lock instead of
//! interleaving a delete and an insert.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use gearup_core::entities::{Reaction, ReactionKind};
use gearup_core::traits::{ReactionRepository, RepoResult, ToggleOutcome};
use gearup_core::value_objects::ViewerKey;
use gearup_core::DomainError;

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_read_error, map_unique_violation, map_write_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn counts_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        post_id: Uuid,
    ) -> RepoResult<(i64, i64)> {
        let rows = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM reactions
            WHERE post_id = $1
            GROUP BY kind
            "#,
        )
        .bind(post_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(map_read_error)?;

        Ok(split_counts(&rows))
    }
}

fn split_counts(rows: &[ReactionCountModel]) -> (i64, i64) {
    let mut likes = 0;
    let mut dislikes = 0;
    for row in rows {
        match row.kind.as_str() {
            "like" => likes = row.count,
            "dislike" => dislikes = row.count,
            _ => {}
        }
    }
    (likes, dislikes)
}

fn parse_stored_kind(kind: &str) -> RepoResult<ReactionKind> {
    kind.parse::<ReactionKind>()
        .map_err(|e| DomainError::InternalError(format!("Stored reaction invalid: {e}")))
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Uuid, viewer_key: &ViewerKey) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT post_id, viewer_key, kind, created_at
            FROM reactions
            WHERE post_id = $1 AND viewer_key = $2
            "#,
        )
        .bind(post_id)
        .bind(viewer_key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn counts(&self, post_id: Uuid) -> RepoResult<(i64, i64)> {
        let rows = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM reactions
            WHERE post_id = $1
            GROUP BY kind
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(split_counts(&rows))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: Uuid,
        viewer_key: &ViewerKey,
        kind: ReactionKind,
    ) -> RepoResult<ToggleOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_write_error)?;

        let stored: Option<String> = sqlx::query_scalar(
            r#"
            SELECT kind FROM reactions
            WHERE post_id = $1 AND viewer_key = $2
            FOR UPDATE
            "#,
        )
        .bind(post_id)
        .bind(viewer_key.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_read_error)?;

        let previous = stored.as_deref().map(parse_stored_kind).transpose()?;

        match previous {
            Some(current) if current == kind => {
                // Repeating the stored reaction removes it
                sqlx::query("DELETE FROM reactions WHERE post_id = $1 AND viewer_key = $2")
                    .bind(post_id)
                    .bind(viewer_key.as_str())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_write_error)?;
            }
            Some(_) => {
                // Opposite reaction switches the row in place
                sqlx::query(
                    r#"
                    UPDATE reactions SET kind = $3, created_at = NOW()
                    WHERE post_id = $1 AND viewer_key = $2
                    "#,
                )
                .bind(post_id)
                .bind(viewer_key.as_str())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_write_error)?;
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO reactions (post_id, viewer_key, kind, created_at)
                    VALUES ($1, $2, $3, NOW())
                    "#,
                )
                .bind(post_id)
                .bind(viewer_key.as_str())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, || DomainError::DuplicateReaction))?;
            }
        }

        let (likes, dislikes) = Self::counts_in_tx(&mut tx, post_id).await?;

        tx.commit().await.map_err(map_write_error)?;

        Ok(ToggleOutcome {
            previous,
            likes,
            dislikes,
        })
    }
}
