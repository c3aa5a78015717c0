//! Person name value object.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::errors::{DomainError, ErrorCode};

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 64;

// Letters (including accented), spaces, apostrophes and hyphens. No digits.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}][\p{L} '\-]*$").expect("valid name regex"));

/// A validated person name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    value: String,
}

impl PersonName {
    /// Validates and normalizes a raw name, trimming surrounding whitespace.
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_LENGTH || trimmed.chars().count() > MAX_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidName,
                format!(
                    "Invalid name format: must be between {} and {} characters",
                    MIN_LENGTH, MAX_LENGTH
                ),
            ));
        }
        if !NAME_PATTERN.is_match(trimmed) {
            return Err(DomainError::new(
                ErrorCode::InvalidName,
                format!("Invalid name format: \"{}\"", raw),
            ));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Rebuilds a name from stored data, applying the same validation.
    pub fn from_persistence(raw: &str) -> Result<Self, DomainError> {
        Self::create(raw)
    }

    /// Returns the name string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Flattens the name back to its primitive representation.
    pub fn to_primitives(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_a_valid_name() {
        let name = PersonName::create("Luciano Figueroa").unwrap();
        assert_eq!(name.value(), "Luciano Figueroa");
    }

    #[test]
    fn accepts_accents_and_apostrophes() {
        assert!(PersonName::create("José María").is_ok());
        assert!(PersonName::create("O'Connor").is_ok());
        assert!(PersonName::create("Pérez-Llorca").is_ok());
    }

    #[test]
    fn rejects_digits_and_symbols() {
        let err = PersonName::create("1nv4l1d-n4m3").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidName);
        assert!(err.message.contains("Invalid name format"));
    }

    #[test]
    fn rejects_too_short_names() {
        assert!(PersonName::create("ab").is_err());
        assert!(PersonName::create("").is_err());
    }

    #[test]
    fn rejects_too_long_names() {
        let long = "a".repeat(MAX_LENGTH + 1);
        assert!(PersonName::create(&long).is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = PersonName::create("  Luciano Figueroa  ").unwrap();
        assert_eq!(name.value(), "Luciano Figueroa");
    }

    #[test]
    fn from_persistence_applies_the_same_validation() {
        assert!(PersonName::from_persistence("Luciano Figueroa").is_ok());
        assert!(PersonName::from_persistence("1nv4l1d-n4m3").is_err());
        assert!(PersonName::from_persistence("").is_err());
    }

    #[test]
    fn equality_is_structural() {
        let a = PersonName::create("Luciano Figueroa").unwrap();
        let b = PersonName::create("Luciano Figueroa").unwrap();
        let c = PersonName::create("Other Person").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
