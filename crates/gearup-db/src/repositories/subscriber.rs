//! PostgreSQL implementation of SubscriberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gearup_core::entities::Subscriber;
use gearup_core::traits::{RepoResult, SubscriberRepository};

use crate::models::SubscriberModel;

use super::error::{map_read_error, map_write_error};

/// PostgreSQL implementation of SubscriberRepository
#[derive(Clone)]
pub struct PgSubscriberRepository {
    pool: PgPool,
}

impl PgSubscriberRepository {
    /// Create a new PgSubscriberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for PgSubscriberRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Subscriber>> {
        let result = sqlx::query_as::<_, SubscriberModel>(
            r#"
            SELECT id, email, active, created_at
            FROM subscribers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(result.map(Subscriber::from))
    }

    #[instrument(skip(self, subscriber), fields(email = %subscriber.email))]
    async fn upsert(&self, subscriber: &Subscriber) -> RepoResult<()> {
        // Re-subscribing an address that unsubscribed simply reactivates it
        sqlx::query(
            r#"
            INSERT INTO subscribers (id, email, active, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET active = TRUE
            "#,
        )
        .bind(subscriber.id)
        .bind(&subscriber.email)
        .bind(subscriber.active)
        .bind(subscriber.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE subscribers SET active = FALSE WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }
}
