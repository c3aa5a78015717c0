//! User identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Unique identifier for a user.
///
/// Identifiers are opaque non-empty strings; uniqueness across the system is
/// the caller's responsibility, not the value object's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Validates a raw identifier, trimming surrounding whitespace.
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InvalidIdentifier,
                "User id cannot be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rebuilds an id from stored data, applying the same validation.
    pub fn from_persistence(raw: &str) -> Result<Self, DomainError> {
        Self::create(raw)
    }

    /// Returns the identifier string.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Flattens the id back to its primitive representation.
    pub fn to_primitives(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
