//! Subscriber service

use tracing::{info, instrument};
use uuid::Uuid;

use gearup_core::entities::Subscriber;

use crate::dto::{SubscribeRequest, SubscriberResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subscriber service
pub struct SubscriberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriberService<'a> {
    /// Create a new SubscriberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign an email up for the newsletter.
    ///
    /// Subscribing an address that already exists (active or not) simply
    /// reactivates it.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn subscribe(&self, request: SubscribeRequest) -> ServiceResult<SubscriberResponse> {
        let email = request.email.trim().to_lowercase();

        let subscriber = Subscriber::new(Uuid::new_v4(), email);
        self.ctx.subscriber_repo().upsert(&subscriber).await?;

        info!(email = %subscriber.email, "Subscriber added");

        Ok(SubscriberResponse::from(&subscriber))
    }

    /// Deactivate a subscription
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, email: &str) -> ServiceResult<()> {
        let email = email.trim().to_lowercase();

        let removed = self.ctx.subscriber_repo().deactivate(&email).await?;
        if !removed {
            return Err(ServiceError::not_found("Subscriber", email));
        }

        info!(email = %email, "Subscriber deactivated");
        Ok(())
    }
}
