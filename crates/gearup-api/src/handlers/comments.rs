//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gearup_service::{AddCommentRequest, CommentResponse, CommentService};

use crate::extractors::{ValidatedJson, ViewerIdentity};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List comments on a post, newest first
///
/// GET /posts/{slug}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(&slug).await?;
    Ok(Json(comments))
}

/// Add a comment
///
/// POST /posts/{slug}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    viewer: ViewerIdentity,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.add_comment(&slug, viewer.key(), request).await?;
    Ok(Created(Json(comment)))
}
