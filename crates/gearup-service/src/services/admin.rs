//! Admin session service
//!
//! Single-operator password gate: verify against the configured argon2 hash
//! and issue a short-lived session token.

use tracing::{info, instrument, warn};

use gearup_common::{verify_password, AppError};

use crate::dto::{AdminLoginRequest, AdminSessionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin session service
pub struct AdminSessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminSessionService<'a> {
    /// Create a new AdminSessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify the admin password and issue a session token
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: AdminLoginRequest) -> ServiceResult<AdminSessionResponse> {
        let valid = verify_password(&request.password, self.ctx.admin_password_hash())?;
        if !valid {
            warn!("Admin login rejected");
            return Err(AppError::InvalidCredentials.into());
        }

        let token = self.ctx.token_service().issue()?;
        info!("Admin session issued");

        Ok(AdminSessionResponse::from(token))
    }
}
