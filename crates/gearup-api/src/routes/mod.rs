//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{admin, comments, events, health, posts, reactions, subscribers};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(subscriber_routes())
        .merge(event_routes())
        .merge(admin_routes())
}

/// Public content routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/front-page", get(posts::front_page))
        .route("/posts/type/:post_type", get(posts::list_by_type))
        .route("/posts/:slug", get(posts::get_post))
        // Reactions
        .route("/posts/:slug/reactions", get(reactions::get_reactions))
        .route("/posts/:slug/reactions/:kind", put(reactions::apply_reaction))
        // Comments
        .route("/posts/:slug/comments", get(comments::list_comments))
        .route("/posts/:slug/comments", post(comments::add_comment))
}

/// Newsletter routes
fn subscriber_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribers", post(subscribers::subscribe))
        .route("/subscribers/:email", delete(subscribers::unsubscribe))
}

/// Change feed routes
fn event_routes() -> Router<AppState> {
    Router::new().route("/events/content", get(events::content_events))
}

/// Admin routes (token-guarded in the handlers)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(admin::login))
        .route("/admin/posts", post(admin::create_post))
        .route("/admin/posts/:post_id", get(admin::get_post))
        .route("/admin/posts/:post_id", patch(admin::update_post))
        .route("/admin/posts/:post_id", delete(admin::delete_post))
        .route("/admin/posts/:post_id/featured", put(admin::feature_post))
        .route("/admin/posts/:post_id/featured", delete(admin::unfeature_post))
        .route("/admin/analytics", get(admin::get_analytics))
}
