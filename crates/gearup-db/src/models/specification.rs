//! Specification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the specifications table
#[derive(Debug, Clone, FromRow)]
pub struct SpecificationModel {
    pub id: Uuid,
    pub post_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub engine_type: Option<String>,
    pub horsepower: Option<i32>,
    pub torque: Option<String>,
    pub transmission: Option<String>,
    pub acceleration_0_60: Option<f64>,
    pub top_speed: Option<i32>,
    pub fuel_economy: Option<String>,
    pub price_range: Option<String>,
    pub created_at: DateTime<Utc>,
}
