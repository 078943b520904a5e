//! ViewerKey value object
//!
//! Best-effort identity for an anonymous reader, used to scope one reaction
//! per viewer per post. A key is an opaque printable token: a client-supplied
//! identifier, a forwarded IP address, or a random per-session fallback.
//! It is NOT a stable identity across sessions or networks.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum accepted key length
const MAX_LEN: usize = 64;
/// Length of the random part of a fallback session key
const SESSION_TOKEN_LEN: usize = 16;

/// Opaque per-viewer identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerKey(String);

impl ViewerKey {
    /// Create a viewer key from an untrusted string.
    ///
    /// The value is trimmed; empty, oversized, or non-printable input is
    /// rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ViewerKeyError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ViewerKeyError::Empty);
        }
        if trimmed.len() > MAX_LEN {
            return Err(ViewerKeyError::TooLong {
                max: MAX_LEN,
                got: trimmed.len(),
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_graphic())
        {
            return Err(ViewerKeyError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Random per-session fallback key, used when no identity is available
    #[must_use]
    pub fn random() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(format!("session-{token}"))
    }

    /// Borrow the key as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ViewerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ViewerKey {
    type Err = ViewerKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Viewer key parse errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewerKeyError {
    #[error("Viewer key is empty")]
    Empty,

    #[error("Viewer key too long: max {max} characters, got {got}")]
    TooLong { max: usize, got: usize },

    #[error("Viewer key contains invalid characters")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ip_and_token_forms() {
        assert!(ViewerKey::new("203.0.113.9").is_ok());
        assert!(ViewerKey::new("2001:db8::1").is_ok());
        assert!(ViewerKey::new("session-a1b2c3d4").is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let key = ViewerKey::new("  203.0.113.9  ").unwrap();
        assert_eq!(key.as_str(), "203.0.113.9");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(ViewerKey::new(""), Err(ViewerKeyError::Empty));
        assert_eq!(ViewerKey::new("   "), Err(ViewerKeyError::Empty));
        assert_eq!(
            ViewerKey::new("a b"),
            Err(ViewerKeyError::InvalidCharacters)
        );
        assert!(matches!(
            ViewerKey::new("x".repeat(65)),
            Err(ViewerKeyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_random_keys_are_distinct() {
        let a = ViewerKey::random();
        let b = ViewerKey::random();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("session-"));
        // A random key always passes its own validation
        assert!(ViewerKey::new(a.as_str()).is_ok());
    }
}
