//! Specification entity - car data attached to a review post

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Car specification, 1:1 with a review post.
///
/// Make, model, and year are required; everything else is whatever the
/// editor filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
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

impl Specification {
    /// Create a new Specification with the required fields
    pub fn new(id: Uuid, post_id: Uuid, make: String, model: String, year: i32) -> Self {
        Self {
            id,
            post_id,
            make,
            model,
            year,
            engine_type: None,
            horsepower: None,
            torque: None,
            transmission: None,
            acceleration_0_60: None,
            top_speed: None,
            fuel_economy: None,
            price_range: None,
            created_at: Utc::now(),
        }
    }

    /// Display name, e.g. "2024 Lotus Emira"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let spec = Specification::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Lotus".to_string(),
            "Emira".to_string(),
            2024,
        );
        assert_eq!(spec.display_name(), "2024 Lotus Emira");
    }
}
