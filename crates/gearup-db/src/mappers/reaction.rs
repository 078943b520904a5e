//! Reaction entity <-> model mapper

use gearup_core::entities::{Reaction, ReactionKind};
use gearup_core::error::DomainError;
use gearup_core::value_objects::ViewerKey;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity.
///
/// Fallible: the stored viewer key and kind were validated on the way in,
/// but a row edited out-of-band must not panic the process.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let viewer_key = ViewerKey::new(model.viewer_key)
            .map_err(|e| DomainError::InternalError(format!("Stored viewer key invalid: {e}")))?;
        let kind = model
            .kind
            .parse::<ReactionKind>()
            .map_err(|e| DomainError::InternalError(format!("Stored reaction invalid: {e}")))?;

        Ok(Reaction {
            post_id: model.post_id,
            viewer_key,
            kind,
            created_at: model.created_at,
        })
    }
}
