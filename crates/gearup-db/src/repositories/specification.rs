//! PostgreSQL implementation of SpecificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gearup_core::entities::Specification;
use gearup_core::traits::{RepoResult, SpecificationRepository};

use crate::models::SpecificationModel;

use super::error::{map_read_error, map_write_error};

/// PostgreSQL implementation of SpecificationRepository
#[derive(Clone)]
pub struct PgSpecificationRepository {
    pool: PgPool,
}

impl PgSpecificationRepository {
    /// Create a new PgSpecificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecificationRepository for PgSpecificationRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Option<Specification>> {
        let result = sqlx::query_as::<_, SpecificationModel>(
            r#"
            SELECT id, post_id, make, model, year, engine_type, horsepower, torque,
                   transmission, acceleration_0_60, top_speed, fuel_economy,
                   price_range, created_at
            FROM specifications
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(result.map(Specification::from))
    }

    #[instrument(skip(self, spec), fields(post_id = %spec.post_id))]
    async fn upsert(&self, spec: &Specification) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO specifications (
                id, post_id, make, model, year, engine_type, horsepower, torque,
                transmission, acceleration_0_60, top_speed, fuel_economy,
                price_range, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (post_id) DO UPDATE SET
                make = EXCLUDED.make,
                model = EXCLUDED.model,
                year = EXCLUDED.year,
                engine_type = EXCLUDED.engine_type,
                horsepower = EXCLUDED.horsepower,
                torque = EXCLUDED.torque,
                transmission = EXCLUDED.transmission,
                acceleration_0_60 = EXCLUDED.acceleration_0_60,
                top_speed = EXCLUDED.top_speed,
                fuel_economy = EXCLUDED.fuel_economy,
                price_range = EXCLUDED.price_range
            "#,
        )
        .bind(spec.id)
        .bind(spec.post_id)
        .bind(&spec.make)
        .bind(&spec.model)
        .bind(spec.year)
        .bind(&spec.engine_type)
        .bind(spec.horsepower)
        .bind(&spec.torque)
        .bind(&spec.transmission)
        .bind(spec.acceleration_0_60)
        .bind(spec.top_speed)
        .bind(&spec.fuel_economy)
        .bind(&spec.price_range)
        .bind(spec.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_post(&self, post_id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM specifications WHERE post_id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}
