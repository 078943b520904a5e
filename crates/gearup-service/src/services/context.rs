//! Service context - dependency container for services
//!
//! Holds the repositories, the change-feed notifier, and the admin auth
//! pieces every service needs.

use std::sync::Arc;

use gearup_common::AdminTokenService;
use gearup_core::traits::{
    CommentRepository, PostRepository, ReactionRepository, SpecificationRepository,
    SubscriberRepository,
};
use gearup_db::{ContentNotifier, PgPool};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks)
    pool: PgPool,

    // Repositories
    post_repo: Arc<dyn PostRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    specification_repo: Arc<dyn SpecificationRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    subscriber_repo: Arc<dyn SubscriberRepository>,

    // Change feed
    notifier: ContentNotifier,

    // Admin auth
    token_service: Arc<AdminTokenService>,
    admin_password_hash: Arc<str>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the specification repository
    pub fn specification_repo(&self) -> &dyn SpecificationRepository {
        self.specification_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the subscriber repository
    pub fn subscriber_repo(&self) -> &dyn SubscriberRepository {
        self.subscriber_repo.as_ref()
    }

    /// Get the content change notifier
    pub fn notifier(&self) -> &ContentNotifier {
        &self.notifier
    }

    /// Get the admin token service
    pub fn token_service(&self) -> &AdminTokenService {
        self.token_service.as_ref()
    }

    /// Get the configured admin password hash
    pub fn admin_password_hash(&self) -> &str {
        &self.admin_password_hash
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    post_repo: Option<Arc<dyn PostRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    specification_repo: Option<Arc<dyn SpecificationRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    subscriber_repo: Option<Arc<dyn SubscriberRepository>>,
    notifier: Option<ContentNotifier>,
    token_service: Option<Arc<AdminTokenService>>,
    admin_password_hash: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            post_repo: None,
            reaction_repo: None,
            specification_repo: None,
            comment_repo: None,
            subscriber_repo: None,
            notifier: None,
            token_service: None,
            admin_password_hash: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn specification_repo(mut self, repo: Arc<dyn SpecificationRepository>) -> Self {
        self.specification_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn subscriber_repo(mut self, repo: Arc<dyn SubscriberRepository>) -> Self {
        self.subscriber_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: ContentNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn token_service(mut self, service: Arc<AdminTokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn admin_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.admin_password_hash = Some(hash.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is
    /// missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            specification_repo: self
                .specification_repo
                .ok_or_else(|| ServiceError::validation("specification_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            subscriber_repo: self
                .subscriber_repo
                .ok_or_else(|| ServiceError::validation("subscriber_repo is required"))?,
            notifier: self
                .notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            token_service: self
                .token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
            admin_password_hash: self
                .admin_password_hash
                .ok_or_else(|| ServiceError::validation("admin_password_hash is required"))?
                .into(),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
