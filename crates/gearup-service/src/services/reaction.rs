//! Reaction service
//!
//! Per-viewer like/dislike state for a post. The toggle itself is atomic in
//! the repository; this layer resolves the slug, derives the viewer's next
//! state from the transition table, and shapes the response.

use tracing::{info, instrument};
use uuid::Uuid;

use gearup_core::entities::{ReactionKind, ViewerReaction};
use gearup_core::value_objects::ViewerKey;

use crate::dto::ReactionStateResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current reaction state for a post as seen by one viewer
    #[instrument(skip(self))]
    pub async fn reaction_state(
        &self,
        slug: &str,
        viewer_key: &ViewerKey,
    ) -> ServiceResult<ReactionStateResponse> {
        let post_id = self.resolve_post(slug).await?;

        let (likes, dislikes) = self.ctx.reaction_repo().counts(post_id).await?;
        let viewer_reaction = self
            .ctx
            .reaction_repo()
            .find(post_id, viewer_key)
            .await?
            .map(|r| r.kind);

        Ok(ReactionStateResponse {
            likes,
            dislikes,
            viewer_reaction: ViewerReaction::from_kind(viewer_reaction),
        })
    }

    /// Apply one like/dislike action and return the state after it.
    ///
    /// The returned counts come from the toggle's own transaction, so they
    /// reflect exactly the applied transition.
    #[instrument(skip(self))]
    pub async fn apply_reaction(
        &self,
        slug: &str,
        viewer_key: &ViewerKey,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionStateResponse> {
        let post_id = self.resolve_post(slug).await?;

        let outcome = self
            .ctx
            .reaction_repo()
            .toggle(post_id, viewer_key, kind)
            .await?;

        let transition = ViewerReaction::from_kind(outcome.previous).apply(kind);

        info!(
            post_id = %post_id,
            action = %kind,
            previous = ?transition.previous,
            next = ?transition.next,
            "Reaction applied"
        );

        Ok(ReactionStateResponse {
            likes: outcome.likes,
            dislikes: outcome.dislikes,
            viewer_reaction: transition.next,
        })
    }

    async fn resolve_post(&self, slug: &str) -> ServiceResult<Uuid> {
        let post = self
            .ctx
            .post_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", slug))?;

        Ok(post.id)
    }
}

#[cfg(test)]
mod tests {
    // Exercised end to end in tests/integration against a live database;
    // the transition table itself is unit-tested in gearup-core.
}
