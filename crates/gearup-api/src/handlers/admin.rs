//! Admin handlers
//!
//! Login plus the post CRUD and analytics behind the admin token guard.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use gearup_service::{
    AdminLoginRequest, AdminSessionResponse, AdminSessionService, AnalyticsResponse,
    AnalyticsService, ContentService, CreatePostRequest, PostDetailResponse, UpdatePostRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_post_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))
}

/// Verify the admin password and issue a session token
///
/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<Json<AdminSessionResponse>> {
    let service = AdminSessionService::new(state.service_context());
    let session = service.login(request).await?;
    Ok(Json(session))
}

/// Create a post
///
/// POST /admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostDetailResponse>>> {
    let service = ContentService::new(state.service_context());
    let post = service.create_post(request).await?;
    Ok(Created(Json(post)))
}

/// Fetch a post by id (no view counted)
///
/// GET /admin/posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = ContentService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}

/// Update a post
///
/// PATCH /admin/posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post_id = parse_post_id(&post_id)?;

    let service = ContentService::new(state.service_context());
    let post = service.update_post(post_id, request).await?;
    Ok(Json(post))
}

/// Delete a post
///
/// DELETE /admin/posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<String>,
) -> ApiResult<NoContent> {
    let post_id = parse_post_id(&post_id)?;

    let service = ContentService::new(state.service_context());
    service.delete_post(post_id).await?;
    Ok(NoContent)
}

/// Make a post the single featured item
///
/// PUT /admin/posts/{post_id}/featured
pub async fn feature_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<String>,
) -> ApiResult<NoContent> {
    let post_id = parse_post_id(&post_id)?;

    let service = ContentService::new(state.service_context());
    service.feature_post(post_id).await?;
    Ok(NoContent)
}

/// Clear the featured flag
///
/// DELETE /admin/posts/{post_id}/featured
pub async fn unfeature_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(post_id): Path<String>,
) -> ApiResult<NoContent> {
    let post_id = parse_post_id(&post_id)?;

    let service = ContentService::new(state.service_context());
    service.unfeature_post(post_id).await?;
    Ok(NoContent)
}

/// Dashboard analytics payload
///
/// GET /admin/analytics
pub async fn get_analytics(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<AnalyticsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    let analytics = service.dashboard().await?;
    Ok(Json(analytics))
}
