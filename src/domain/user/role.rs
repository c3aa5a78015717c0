//! Role enumeration for user permissions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Permission role of a user. A flat enumeration with no ordering;
/// equality is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Client,
    Guest,
    Admin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl Role {
    /// Parses a role from its wire string.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "user" => Ok(Role::User),
            "client" => Ok(Role::Client),
            "guest" => Ok(Role::Guest),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            other => Err(DomainError::new(
                ErrorCode::InvalidRole,
                format!("Invalid role: \"{}\"", other),
            )),
        }
    }

    /// Returns the wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Client => "client",
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
