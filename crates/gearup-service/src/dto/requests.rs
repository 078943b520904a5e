//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Validation runs before any remote call.

use gearup_core::entities::PostType;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Slug must be 1-200 characters"))]
    pub slug: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,

    #[serde(default)]
    pub categories: Vec<String>,

    #[validate(length(max = 300, message = "Meta description must be at most 300 characters"))]
    pub meta_description: Option<String>,

    pub post_type: PostType,

    /// Car specification, honored only for review posts
    #[validate(nested)]
    pub specification: Option<SpecificationRequest>,

    #[serde(default)]
    pub featured: bool,
}

/// Update post request (absent fields keep their current value)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Slug must be 1-200 characters"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    pub image_url: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,

    pub categories: Option<Vec<String>>,

    #[validate(length(max = 300, message = "Meta description must be at most 300 characters"))]
    pub meta_description: Option<String>,

    pub post_type: Option<PostType>,

    /// Car specification, honored only for review posts
    #[validate(nested)]
    pub specification: Option<SpecificationRequest>,
}

/// Car specification payload; make, model, and year are required
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SpecificationRequest {
    #[validate(length(min = 1, max = 100, message = "Make is required"))]
    pub make: String,

    #[validate(length(min = 1, max = 100, message = "Model is required"))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100, message = "Year is out of range"))]
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

// ============================================================================
// Comment Requests
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub author_name: String,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Subscriber Requests
// ============================================================================

/// Newsletter signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_requires_make_model_year() {
        let spec = SpecificationRequest {
            make: String::new(),
            model: "Emira".to_string(),
            year: 2024,
            engine_type: None,
            horsepower: None,
            torque: None,
            transmission: None,
            acceleration_0_60: None,
            top_speed: None,
            fuel_economy: None,
            price_range: None,
        };
        assert!(spec.validate().is_err());

        let spec = SpecificationRequest {
            make: "Lotus".to_string(),
            ..spec
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_create_post_validates_nested_specification() {
        let request = CreatePostRequest {
            title: "Emira first drive".to_string(),
            slug: "emira-first-drive".to_string(),
            content: "Mid-engine balance.".to_string(),
            excerpt: None,
            image_url: None,
            author: "Alex".to_string(),
            categories: vec![],
            meta_description: None,
            post_type: PostType::Review,
            specification: Some(SpecificationRequest {
                make: "Lotus".to_string(),
                model: String::new(),
                year: 2024,
                engine_type: None,
                horsepower: None,
                torque: None,
                transmission: None,
                acceleration_0_60: None,
                top_speed: None,
                fuel_economy: None,
                price_range: None,
            }),
            featured: false,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_subscribe_rejects_bad_email() {
        let request = SubscribeRequest {
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());

        let request = SubscribeRequest {
            email: "reader@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
