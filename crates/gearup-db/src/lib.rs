//! # gearup-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `gearup-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - The content change feed (Postgres LISTEN/NOTIFY)

pub mod mappers;
pub mod models;
pub mod notify;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use notify::{ContentChange, ContentFeed, ContentNotifier, ContentOp, CONTENT_CHANNEL};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgReactionRepository, PgSpecificationRepository,
    PgSubscriberRepository,
};
