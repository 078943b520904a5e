//! Subscriber entity <-> model mapper

use gearup_core::entities::Subscriber;

use crate::models::SubscriberModel;

/// Convert SubscriberModel to Subscriber entity
impl From<SubscriberModel> for Subscriber {
    fn from(model: SubscriberModel) -> Self {
        Subscriber {
            id: model.id,
            email: model.email,
            active: model.active,
            created_at: model.created_at,
        }
    }
}
