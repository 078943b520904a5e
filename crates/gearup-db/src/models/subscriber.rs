//! Subscriber database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the subscribers table
#[derive(Debug, Clone, FromRow)]
pub struct SubscriberModel {
    pub id: Uuid,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
