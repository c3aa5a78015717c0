//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::errors::{DomainError, ErrorCode};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A validated, normalized email address.
///
/// Normalization trims surrounding whitespace and lowercases the value, and
/// is idempotent: re-normalizing an already-normalized email is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Validates and normalizes a raw email string.
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::new(ErrorCode::InvalidEmail, "Email cannot be empty"));
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(DomainError::new(
                ErrorCode::InvalidEmail,
                format!("Invalid email format: \"{}\"", raw),
            ));
        }

        Ok(Self { value: normalized })
    }

    /// Rebuilds an email from stored data, applying the same validation.
    pub fn from_persistence(raw: &str) -> Result<Self, DomainError> {
        Self::create(raw)
    }

    /// Returns the normalized email string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Flattens the email back to its primitive representation.
    pub fn to_primitives(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
