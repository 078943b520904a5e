//! Specification entity <-> model mapper

use gearup_core::entities::Specification;

use crate::models::SpecificationModel;

/// Convert SpecificationModel to Specification entity
impl From<SpecificationModel> for Specification {
    fn from(model: SpecificationModel) -> Self {
        Specification {
            id: model.id,
            post_id: model.post_id,
            make: model.make,
            model: model.model,
            year: model.year,
            engine_type: model.engine_type,
            horsepower: model.horsepower,
            torque: model.torque,
            transmission: model.transmission,
            acceleration_0_60: model.acceleration_0_60,
            top_speed: model.top_speed,
            fuel_economy: model.fuel_economy,
            price_range: model.price_range,
            created_at: model.created_at,
        }
    }
}
