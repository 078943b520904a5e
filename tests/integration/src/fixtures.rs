//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create post request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub categories: Vec<String>,
    pub meta_description: Option<String>,
    pub post_type: String,
    pub specification: Option<SpecificationRequest>,
    pub featured: bool,
}

impl CreatePostRequest {
    /// A unique news post
    pub fn news() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test News {suffix}"),
            slug: format!("test-news-{suffix}"),
            content: "Industry update with just enough words to read.".to_string(),
            excerpt: Some("Industry update".to_string()),
            image_url: None,
            author: "Test Author".to_string(),
            categories: vec!["ev".to_string()],
            meta_description: None,
            post_type: "news".to_string(),
            specification: None,
            featured: false,
        }
    }

    /// A unique review post with a complete specification
    pub fn review() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Review {suffix}"),
            slug: format!("test-review-{suffix}"),
            content: "A proper road test writeup.".to_string(),
            excerpt: None,
            image_url: None,
            author: "Test Author".to_string(),
            categories: vec!["sports".to_string()],
            meta_description: None,
            post_type: "review".to_string(),
            specification: Some(SpecificationRequest::complete()),
            featured: false,
        }
    }

    /// A unique guide post
    pub fn guide() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Guide {suffix}"),
            slug: format!("test-guide-{suffix}"),
            content: "Step by step maintenance guide.".to_string(),
            excerpt: None,
            image_url: None,
            author: "Test Author".to_string(),
            categories: vec![],
            meta_description: None,
            post_type: "guide".to_string(),
            specification: None,
            featured: false,
        }
    }
}

/// Car specification payload
#[derive(Debug, Clone, Serialize)]
pub struct SpecificationRequest {
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
}

impl SpecificationRequest {
    /// A complete specification
    pub fn complete() -> Self {
        Self {
            make: "Lotus".to_string(),
            model: "Emira".to_string(),
            year: 2024,
            engine_type: Some("V6".to_string()),
            horsepower: Some(400),
            torque: Some("310 lb-ft".to_string()),
            transmission: Some("6MT".to_string()),
            acceleration_0_60: Some(4.2),
            top_speed: Some(180),
            fuel_economy: None,
            price_range: None,
        }
    }

    /// A specification missing a required field (model)
    pub fn missing_model() -> Self {
        Self {
            model: String::new(),
            ..Self::complete()
        }
    }
}

/// Add comment request
#[derive(Debug, Clone, Serialize)]
pub struct AddCommentRequest {
    pub author_name: String,
    pub content: String,
}

impl AddCommentRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            author_name: "Sam".to_string(),
            content: content.to_string(),
        }
    }
}

/// Post detail response
#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub categories: Vec<String>,
    pub post_type: String,
    pub views: i64,
    pub reading_time_minutes: i32,
    pub featured: bool,
    pub specification: Option<SpecificationResponse>,
}

/// Post summary response (listings)
#[derive(Debug, Deserialize)]
pub struct PostSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub post_type: String,
    pub views: i64,
    pub featured: bool,
}

/// Car specification response
#[derive(Debug, Deserialize)]
pub struct SpecificationResponse {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Front page response
#[derive(Debug, Deserialize)]
pub struct FrontPageResponse {
    pub featured: Option<PostSummaryResponse>,
    pub posts: Vec<PostSummaryResponse>,
}

/// Reaction state response
#[derive(Debug, Deserialize)]
pub struct ReactionStateResponse {
    pub likes: i64,
    pub dislikes: i64,
    pub viewer_reaction: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: String,
}

/// Subscriber response
#[derive(Debug, Deserialize)]
pub struct SubscriberResponse {
    pub email: String,
    pub active: bool,
}

/// Admin session response
#[derive(Debug, Deserialize)]
pub struct AdminSessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Analytics totals
#[derive(Debug, Deserialize)]
pub struct TotalsResponse {
    pub total_posts: usize,
    pub total_views: i64,
    pub average_reading_time: i32,
}

/// Per-type count entry
#[derive(Debug, Deserialize)]
pub struct TypeCountResponse {
    pub name: String,
    pub count: usize,
}

/// Schedule entry
#[derive(Debug, Deserialize)]
pub struct DayCountResponse {
    pub date: String,
    pub count: usize,
}

/// Trend entry
#[derive(Debug, Deserialize)]
pub struct DayTrendResponse {
    pub date: String,
    pub views: i64,
    pub engagement: i64,
}

/// Analytics response
#[derive(Debug, Deserialize)]
pub struct AnalyticsResponse {
    pub totals: TotalsResponse,
    pub posts_by_type: Vec<TypeCountResponse>,
    pub views_by_type: Vec<serde_json::Value>,
    pub schedule: Vec<DayCountResponse>,
    pub trend: Vec<DayTrendResponse>,
    pub suggestions: Vec<String>,
    pub best_posting_hour: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
