//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use gearup_common::{AdminTokenService, AppConfig, AppError};
use gearup_db::{
    create_pool, ContentFeed, ContentNotifier, PgCommentRepository, PgPostRepository,
    PgReactionRepository, PgSpecificationRepository, PgSubscriberRepository,
};
use gearup_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and basic middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the application with rate limiting and configured CORS.
///
/// Health routes are mounted outside the rate limiter so probes keep
/// working under load.
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = gearup_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Start the content change feed
    let feed = ContentFeed::start(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Content change feed listening");

    // Admin token service
    let token_service = Arc::new(AdminTokenService::new(
        &config.admin.jwt_secret,
        config.admin.token_expiry,
    ));

    // Create repositories
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let specification_repo = Arc::new(PgSpecificationRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let subscriber_repo = Arc::new(PgSubscriberRepository::new(pool.clone()));

    // Change notifier
    let notifier = ContentNotifier::new(pool.clone());

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .post_repo(post_repo)
        .reaction_repo(reaction_repo)
        .specification_repo(specification_repo)
        .comment_repo(comment_repo)
        .subscriber_repo(subscriber_repo)
        .notifier(notifier)
        .token_service(token_service)
        .admin_password_hash(config.admin.password_hash.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, feed, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    // ConnectInfo feeds the peer address into the viewer identity fallback
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application (rate limited, configured CORS)
    let app = create_app_with_config(state.clone(), state.config());

    // Run server
    run_server(app, addr).await
}
