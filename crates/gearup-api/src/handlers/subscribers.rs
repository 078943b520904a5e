//! Newsletter subscriber handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gearup_service::{SubscribeRequest, SubscriberResponse, SubscriberService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Sign up for the newsletter
///
/// POST /subscribers
pub async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> ApiResult<Created<Json<SubscriberResponse>>> {
    let service = SubscriberService::new(state.service_context());
    let subscriber = service.subscribe(request).await?;
    Ok(Created(Json(subscriber)))
}

/// Unsubscribe an email address
///
/// DELETE /subscribers/{email}
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<NoContent> {
    let service = SubscriberService::new(state.service_context());
    service.unsubscribe(&email).await?;
    Ok(NoContent)
}
