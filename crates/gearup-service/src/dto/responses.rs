//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use gearup_core::entities::{PostType, ViewerReaction};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Post Responses
// ============================================================================

/// Post card for listings (no body content)
#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author: String,
    pub categories: Vec<String>,
    pub post_type: PostType,
    pub views: i64,
    pub reading_time_minutes: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Full post with body and attached specification
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub post_type: PostType,
    pub views: i64,
    pub reading_time_minutes: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<SpecificationResponse>,
}

/// Car specification attached to a review
#[derive(Debug, Clone, Serialize)]
pub struct SpecificationResponse {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horsepower: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub torque: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_0_60: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_economy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

/// Landing page selection: one featured post plus the recent list
#[derive(Debug, Clone, Serialize)]
pub struct FrontPageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<PostSummaryResponse>,
    pub posts: Vec<PostSummaryResponse>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Aggregate reaction state for one post as seen by the requesting viewer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionStateResponse {
    pub likes: i64,
    pub dislikes: i64,
    pub viewer_reaction: ViewerReaction,
}

// ============================================================================
// Comment / Subscriber Responses
// ============================================================================

/// One reader comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Subscription confirmation
#[derive(Debug, Clone, Serialize)]
pub struct SubscriberResponse {
    pub email: String,
    pub active: bool,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Headline dashboard numbers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TotalsResponse {
    pub total_posts: usize,
    pub total_views: i64,
    pub average_reading_time: i32,
}

/// Post count for one type
#[derive(Debug, Clone, Serialize)]
pub struct TypeCountResponse {
    pub name: String,
    pub count: usize,
}

/// Accumulated views for one type
#[derive(Debug, Clone, Serialize)]
pub struct TypeViewsResponse {
    pub name: String,
    pub views: i64,
}

/// Posts published on one calendar day
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayCountResponse {
    pub date: NaiveDate,
    pub count: usize,
}

/// Views and engagement for one calendar day
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayTrendResponse {
    pub date: NaiveDate,
    pub views: i64,
    pub engagement: i64,
}

/// Complete admin dashboard payload
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub totals: TotalsResponse,
    pub posts_by_type: Vec<TypeCountResponse>,
    pub views_by_type: Vec<TypeViewsResponse>,
    pub schedule: Vec<DayCountResponse>,
    pub trend: Vec<DayTrendResponse>,
    pub suggestions: Vec<String>,
    /// Clock-face label, e.g. "12:00"
    pub best_posting_hour: String,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Admin session token
#[derive(Debug, Clone, Serialize)]
pub struct AdminSessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    /// A healthy response
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    /// Build a readiness response from dependency checks
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
