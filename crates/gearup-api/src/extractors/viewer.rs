//! Viewer identity extractor
//!
//! Resolves the best-effort viewer key scoping reactions and comments:
//! an explicit `x-viewer-key` header wins, then the forwarded/peer IP,
//! then a random per-session token. None of these are stable identities;
//! they only have to be stable enough to keep one reaction per viewer.

use std::net::SocketAddr;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use gearup_core::value_objects::ViewerKey;

use crate::response::ApiError;

/// Header carrying a client-chosen opaque viewer token
pub const VIEWER_KEY_HEADER: &str = "x-viewer-key";
/// Standard proxy header carrying the original client IP
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// The requesting viewer's identity
#[derive(Debug, Clone)]
pub struct ViewerIdentity(pub ViewerKey);

impl ViewerIdentity {
    /// Borrow the underlying viewer key
    #[inline]
    pub fn key(&self) -> &ViewerKey {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ViewerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // An explicit token is the one form the client chose; reject it
        // rather than silently falling back when it is malformed.
        if let Some(value) = parts.headers.get(VIEWER_KEY_HEADER) {
            let raw = value
                .to_str()
                .map_err(|_| ApiError::invalid_query("Invalid x-viewer-key header"))?;
            let key = ViewerKey::new(raw)
                .map_err(|e| ApiError::invalid_query(format!("Invalid x-viewer-key header: {e}")))?;
            return Ok(Self(key));
        }

        if let Some(key) = forwarded_ip(parts) {
            return Ok(Self(key));
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            if let Ok(key) = ViewerKey::new(addr.ip().to_string()) {
                return Ok(Self(key));
            }
        }

        Ok(Self(ViewerKey::random()))
    }
}

fn forwarded_ip(parts: &Parts) -> Option<ViewerKey> {
    let value = parts.headers.get(FORWARDED_FOR_HEADER)?.to_str().ok()?;
    // First hop is the original client
    let first = value.split(',').next()?.trim();
    ViewerKey::new(first).ok()
}
