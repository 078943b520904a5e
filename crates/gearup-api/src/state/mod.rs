//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, the content change feed, and configuration.

use std::sync::Arc;

use gearup_common::AppConfig;
use gearup_db::{ContentChange, ContentFeed};
use gearup_service::ServiceContext;
use tokio::sync::broadcast;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Content change feed (LISTEN/NOTIFY fan-out)
    feed: Arc<ContentFeed>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, feed: ContentFeed, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            feed: Arc::new(feed),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Subscribe to the content change feed
    pub fn subscribe_changes(&self) -> broadcast::Receiver<ContentChange> {
        self.feed.subscribe()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
