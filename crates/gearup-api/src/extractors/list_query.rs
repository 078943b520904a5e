//! List query extractor
//!
//! Extracts and clamps the `limit` parameter used by listing endpoints.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw list query parameters
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated list parameters
#[derive(Debug, Clone, Copy)]
pub struct ListQuery {
    /// Maximum number of items to return (clamped to 1-100)
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(ListQuery::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let query = ListQuery::default();
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(ListQuery::from(ListParams { limit: Some(500) }).limit, MAX_LIMIT);
        assert_eq!(ListQuery::from(ListParams { limit: Some(0) }).limit, 1);
        assert_eq!(ListQuery::from(ListParams { limit: None }).limit, DEFAULT_LIMIT);
    }
}
