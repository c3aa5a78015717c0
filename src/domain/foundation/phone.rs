//! Phone value object for Argentine mobile numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::errors::{DomainError, ErrorCode};

// National mobile format without the country prefix: area code + number,
// ten digits total (e.g. "1134567890" for Buenos Aires).
static CELLPHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid cellphone regex"));

/// A validated Argentine mobile phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    number: String,
}

impl Phone {
    /// Validates a raw phone number, trimming surrounding whitespace.
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if !CELLPHONE_PATTERN.is_match(trimmed) {
            return Err(DomainError::new(
                ErrorCode::InvalidPhone,
                format!("Invalid phone number: \"{}\"", raw),
            ));
        }

        Ok(Self {
            number: trimmed.to_string(),
        })
    }

    /// Rebuilds a phone from stored data, applying the same validation.
    pub fn from_persistence(raw: &str) -> Result<Self, DomainError> {
        Self::create(raw).map_err(|err| {
            DomainError::new(
                ErrorCode::InvalidPhone,
                format!("Invalid phone number from persistence: \"{}\"", raw),
            )
            .with_detail("source", "persistence")
            .with_detail("original", err.message)
        })
    }

    /// Returns the phone number string.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Flattens the phone back to its primitive representation.
    pub fn to_primitives(&self) -> String {
        self.number.clone()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
