//! Content change feed over Postgres LISTEN/NOTIFY
//!
//! Mutations publish a small `{op, id}` payload on a single channel;
//! a listener task forwards payloads into a broadcast channel for any number
//! of in-process consumers (the SSE endpoint, tests). Delivery is
//! best-effort and unordered - consumers are expected to refetch, which is
//! idempotent. A failed notify never fails the mutation that triggered it.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;

use gearup_core::DomainError;

use crate::repositories::error::map_write_error;

/// Notification channel for content item changes
pub const CONTENT_CHANNEL: &str = "gearup_content";

/// Buffered notifications per subscriber before lagging ones are dropped
const FEED_CAPACITY: usize = 64;

/// What happened to a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOp {
    Created,
    Updated,
    Deleted,
    Featured,
}

/// One change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentChange {
    pub op: ContentOp,
    pub id: Uuid,
}

impl ContentChange {
    /// Create a new ContentChange
    pub fn new(op: ContentOp, id: Uuid) -> Self {
        Self { op, id }
    }
}

/// Publishes change notifications after content mutations
#[derive(Clone)]
pub struct ContentNotifier {
    pool: PgPool,
}

impl ContentNotifier {
    /// Create a new ContentNotifier
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Publish one change notification.
    ///
    /// Callers treat this as fire-and-forget; the service layer logs and
    /// drops the error.
    pub async fn publish(&self, change: ContentChange) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&change)
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        sqlx::query("SELECT pg_notify($1, $2)")
            .bind(CONTENT_CHANNEL)
            .bind(payload)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}

impl std::fmt::Debug for ContentNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentNotifier").finish()
    }
}

/// In-process fan-out of content change notifications
pub struct ContentFeed {
    sender: broadcast::Sender<ContentChange>,
}

impl ContentFeed {
    /// Start listening on the content channel.
    ///
    /// Spawns a background task that forwards every parseable notification
    /// into the broadcast channel. Unparseable payloads and transient
    /// listener errors are logged and skipped; `PgListener` reconnects on
    /// its own.
    pub async fn start(pool: &PgPool) -> Result<Self, DomainError> {
        let mut listener = PgListener::connect_with(pool)
            .await
            .map_err(|e| DomainError::ReadFailure(e.to_string()))?;
        listener
            .listen(CONTENT_CHANNEL)
            .await
            .map_err(|e| DomainError::ReadFailure(e.to_string()))?;

        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        let tx = sender.clone();

        tokio::spawn(async move {
            loop {
                match listener.recv().await {
                    Ok(notification) => {
                        match serde_json::from_str::<ContentChange>(notification.payload()) {
                            Ok(change) => {
                                debug!(?change, "Content change received");
                                // Send fails only when nobody is subscribed
                                let _ = tx.send(change);
                            }
                            Err(e) => {
                                warn!(error = %e, payload = notification.payload(),
                                      "Ignoring malformed content notification");
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Content listener error, retrying");
                    }
                }
            }
        });

        Ok(Self { sender })
    }

    /// Subscribe to the change feed
    pub fn subscribe(&self) -> broadcast::Receiver<ContentChange> {
        self.sender.subscribe()
    }
}

impl std::fmt::Debug for ContentFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFeed")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_payload_roundtrip() {
        let change = ContentChange::new(ContentOp::Updated, Uuid::new_v4());
        let json = serde_json::to_string(&change).unwrap();
        assert!(json.contains("\"updated\""));

        let back: ContentChange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        assert!(serde_json::from_str::<ContentChange>("{\"op\":\"exploded\"}").is_err());
    }
}
