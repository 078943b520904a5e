//! Public post handlers
//!
//! Listing and detail endpoints for the content catalogue.

use axum::{
    extract::{Path, State},
    Json,
};
use gearup_core::entities::PostType;
use gearup_service::{ContentService, FrontPageResponse, PostDetailResponse, PostSummaryResponse};

use crate::extractors::ListQuery;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List recent posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<Vec<PostSummaryResponse>>> {
    let service = ContentService::new(state.service_context());
    let posts = service.list_recent(query.limit).await?;
    Ok(Json(posts))
}

/// Landing page selection (featured post + recent list)
///
/// GET /posts/front-page
pub async fn front_page(State(state): State<AppState>) -> ApiResult<Json<FrontPageResponse>> {
    let service = ContentService::new(state.service_context());
    let page = service.front_page().await?;
    Ok(Json(page))
}

/// List posts of one type (reviews/news/guides pages)
///
/// GET /posts/type/{post_type}
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(post_type): Path<String>,
    query: ListQuery,
) -> ApiResult<Json<Vec<PostSummaryResponse>>> {
    let post_type = post_type
        .parse::<PostType>()
        .map_err(|_| ApiError::invalid_path("Unknown post type"))?;

    let service = ContentService::new(state.service_context());
    let posts = service.list_by_type(post_type, query.limit).await?;
    Ok(Json(posts))
}

/// Fetch one post by slug (counts a view)
///
/// GET /posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PostDetailResponse>> {
    let service = ContentService::new(state.service_context());
    let post = service.view_post(&slug).await?;
    Ok(Json(post))
}
