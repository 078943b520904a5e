//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, viewer identity, validation,
//! and list queries.

mod admin;
mod list_query;
mod validated;
mod viewer;

pub use admin::AdminUser;
pub use list_query::{ListParams, ListQuery};
pub use validated::ValidatedJson;
pub use viewer::{ViewerIdentity, VIEWER_KEY_HEADER};
