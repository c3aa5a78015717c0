//! Password hash value object.
//!
//! By the time a password reaches this layer it is already hashed; the
//! hashing algorithm itself is an opaque transform owned by the caller.
//! Equality compares the hashed representation.

use crate::domain::foundation::{DomainError, ErrorCode};

const MIN_LENGTH: usize = 6;

/// An opaque, already-hashed password.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordHash {
    hashed: String,
}

impl PasswordHash {
    /// Validates a hashed password string.
    pub fn create(hashed: &str) -> Result<Self, DomainError> {
        if hashed.len() < MIN_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidPassword,
                format!("Password hash must be at least {} characters", MIN_LENGTH),
            ));
        }
        Ok(Self {
            hashed: hashed.to_string(),
        })
    }

    /// Rebuilds a password hash from stored data, applying the same validation.
    pub fn from_persistence(hashed: &str) -> Result<Self, DomainError> {
        Self::create(hashed)
    }

    /// Returns the hashed representation.
    pub fn hashed(&self) -> &str {
        &self.hashed
    }

    /// Flattens the hash back to its primitive representation.
    pub fn to_primitives(&self) -> String {
        self.hashed.clone()
    }
}
