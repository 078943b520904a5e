//! Subscriber entity - a newsletter signup

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Newsletter subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Create a new active Subscriber
    pub fn new(id: Uuid, email: String) -> Self {
        Self {
            id,
            email,
            active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_subscriber_is_active() {
        let sub = Subscriber::new(Uuid::new_v4(), "reader@example.com".to_string());
        assert!(sub.active);
    }
}
