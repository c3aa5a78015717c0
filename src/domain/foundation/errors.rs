//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InvalidArgument,
    InvalidIdentifier,
    InvalidEmail,
    InvalidName,
    InvalidPassword,
    InvalidPhone,
    InvalidAddress,
    InvalidStreetName,
    InvalidStreetNumber,
    InvalidZipCode,
    InvalidProvince,
    InvalidRole,
    InvalidStatus,
    MissingRequiredField,

    // Business rule errors
    InvariantViolation,

    // Not found errors
    UserNotFound,

    // Conflict errors
    DuplicateEmail,

    // Infrastructure errors
    RepositoryError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::InvalidIdentifier => "INVALID_IDENTIFIER",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::InvalidPhone => "INVALID_PHONE",
            ErrorCode::InvalidAddress => "INVALID_ADDRESS",
            ErrorCode::InvalidStreetName => "INVALID_STREET_NAME",
            ErrorCode::InvalidStreetNumber => "INVALID_STREET_NUMBER",
            ErrorCode::InvalidZipCode => "INVALID_ZIP_CODE",
            ErrorCode::InvalidProvince => "INVALID_PROVINCE",
            ErrorCode::InvalidRole => "INVALID_ROLE",
            ErrorCode::InvalidStatus => "INVALID_STATUS",
            ErrorCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorCode::InvariantViolation => "INVARIANT_VIOLATION",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::RepositoryError => "REPOSITORY_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a not-found error for a user id.
    pub fn user_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User with id {} not found", id))
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvariantViolation, message)
    }

    /// Creates a missing required field error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Required field '{}' is missing", field),
        )
        .with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
