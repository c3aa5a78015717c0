//! Status enumeration for the user lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Lifecycle status of a user account.
///
/// A flat enumeration: any status may transition to any other at this
/// level. Transition policy (which transitions are meaningful) lives in
/// specifications and application workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Inactive,
    Suspended,
    Locked,
    PendingEmailVerification,
    PendingAdminApproval,
}

impl Status {
    /// Parses a status from its wire string.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "suspended" => Ok(Status::Suspended),
            "locked" => Ok(Status::Locked),
            "pending_email_verification" => Ok(Status::PendingEmailVerification),
            "pending_admin_approval" => Ok(Status::PendingAdminApproval),
            other => Err(DomainError::new(
                ErrorCode::InvalidStatus,
                format!("Invalid status: \"{}\"", other),
            )),
        }
    }

    /// Returns the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Suspended => "suspended",
            Status::Locked => "locked",
            Status::PendingEmailVerification => "pending_email_verification",
            Status::PendingAdminApproval => "pending_admin_approval",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Status::Locked)
    }

    pub fn is_pending_email_verification(&self) -> bool {
        matches!(self, Status::PendingEmailVerification)
    }

    pub fn is_pending_admin_approval(&self) -> bool {
        matches!(self, Status::PendingAdminApproval)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
