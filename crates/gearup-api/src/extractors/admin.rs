//! Admin authentication extractor
//!
//! Verifies the bearer token issued by the admin login endpoint. Every
//! mutating and analytics route takes this extractor as its guard.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use gearup_common::AdminClaims;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated admin session
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: AdminClaims,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(ApiError::MissingAuth)?
            .to_str()
            .map_err(|_| ApiError::InvalidAuthFormat)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::InvalidAuthFormat)?;

        let claims = state.service_context().token_service().verify(token)?;

        Ok(Self { claims })
    }
}
