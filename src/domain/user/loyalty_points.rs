//! Loyalty points value object.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A non-negative loyalty points balance.
///
/// Amounts are unsigned, so a negative balance is unrepresentable.
/// `add` and `subtract` return new values; a subtraction past zero fails
/// and leaves the prior value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoyaltyPoints(u32);

impl LoyaltyPoints {
    /// Creates a balance from a raw count.
    pub fn create(value: u32) -> Self {
        Self(value)
    }

    /// Rebuilds a balance from stored data.
    pub fn from_persistence(value: u32) -> Self {
        Self(value)
    }

    /// Returns the current balance.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns a new balance increased by `amount`.
    pub fn add(&self, amount: u32) -> Result<Self, DomainError> {
        self.0
            .checked_add(amount)
            .map(Self)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvariantViolation,
                    "Loyalty points balance overflow",
                )
            })
    }

    /// Returns a new balance decreased by `amount`.
    ///
    /// Fails when `amount` exceeds the current balance.
    pub fn subtract(&self, amount: u32) -> Result<Self, DomainError> {
        self.0.checked_sub(amount).map(Self).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvariantViolation,
                "Cannot subtract more points than available",
            )
            .with_detail("available", self.0.to_string())
            .with_detail("requested", amount.to_string())
        })
    }
}

impl fmt::Display for LoyaltyPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
