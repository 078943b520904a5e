//! Content change feed handler
//!
//! Exposes the LISTEN/NOTIFY feed as server-sent events. Clients treat any
//! event as a hint to refetch; delivery is best-effort and unordered, and a
//! consumer that lags simply skips ahead (the subsequent refetch is
//! idempotent).

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::state::AppState;

/// Stream content change notifications
///
/// GET /events/content
pub async fn content_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.subscribe_changes();

    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(change) => match Event::default().event("content").json_data(change) {
                    Ok(event) => return Some((Ok(event), receiver)),
                    Err(e) => {
                        debug!(error = %e, "Skipping unserializable change event");
                    }
                },
                // Missed notifications only mean a redundant refetch was
                // skipped; keep streaming from the current position.
                Err(RecvError::Lagged(missed)) => {
                    debug!(missed, "Change feed subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
