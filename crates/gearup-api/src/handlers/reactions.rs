//! Reaction handlers
//!
//! Per-viewer like/dislike state on a post.

use axum::{
    extract::{Path, State},
    Json,
};
use gearup_core::entities::ReactionKind;
use gearup_service::{ReactionService, ReactionStateResponse};

use crate::extractors::ViewerIdentity;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Current reaction state for the requesting viewer
///
/// GET /posts/{slug}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    viewer: ViewerIdentity,
    Path(slug): Path<String>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction_state = service.reaction_state(&slug, viewer.key()).await?;
    Ok(Json(reaction_state))
}

/// Toggle a like/dislike and return the state after it
///
/// PUT /posts/{slug}/reactions/{kind}
pub async fn apply_reaction(
    State(state): State<AppState>,
    viewer: ViewerIdentity,
    Path((slug, kind)): Path<(String, String)>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let kind = kind
        .parse::<ReactionKind>()
        .map_err(|_| ApiError::invalid_path("Unknown reaction kind"))?;

    let service = ReactionService::new(state.service_context());
    let reaction_state = service.apply_reaction(&slug, viewer.key(), kind).await?;
    Ok(Json(reaction_state))
}
