//! Admin authentication utilities

mod jwt;
mod password;

pub use jwt::{AdminClaims, AdminToken, AdminTokenService};
pub use password::{hash_password, verify_password};
