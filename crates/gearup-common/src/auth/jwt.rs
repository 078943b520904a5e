//! Admin session tokens
//!
//! The dashboard has a single operator, so a session is one short-lived
//! signed token - no refresh tokens, no per-user identity.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Subject claim carried by every admin token
const ADMIN_SUBJECT: &str = "admin";

/// JWT claims for an admin session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject (always "admin")
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AdminClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issued admin session token
#[derive(Debug, Clone, Serialize)]
pub struct AdminToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Service for issuing and verifying admin session tokens
#[derive(Clone)]
pub struct AdminTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl AdminTokenService {
    /// Create a new token service with the given secret and expiry seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue a new admin session token
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self) -> Result<AdminToken, AppError> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {e}")))?;

        Ok(AdminToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }

    /// Verify a bearer token and return its claims
    ///
    /// # Errors
    /// Returns `TokenExpired` for expired tokens and `InvalidToken` for
    /// anything else that fails validation
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        let data = decode::<AdminClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        if data.claims.sub != ADMIN_SUBJECT {
            return Err(AppError::InvalidToken);
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for AdminTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminTokenService")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = AdminTokenService::new("test-secret", 3600);
        let token = service.issue().unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);

        let claims = service.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = AdminTokenService::new("secret-a", 3600);
        let verifier = AdminTokenService::new("secret-b", 3600);

        let token = issuer.issue().unwrap();
        assert!(matches!(
            verifier.verify(&token.access_token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = AdminTokenService::new("test-secret", 3600);
        assert!(matches!(
            service.verify("not-a-token"),
            Err(AppError::InvalidToken)
        ));
    }
}
