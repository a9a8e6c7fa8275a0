//! Role domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of roles a signed-in user can hold.
///
/// Serialized as `"Owner"`, `"Staff"` and `"Student"` in the persisted
/// session record. Anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Business owner (administrator of an organization)
    Owner,
    Staff,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Staff, Role::Student];

    /// Canonical identifier used in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Staff => "Staff",
            Role::Student => "Student",
        }
    }

    /// Human-facing label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Business Owner",
            Role::Staff => "Staff",
            Role::Student => "Student",
        }
    }

    /// Parses a designation as returned by the login endpoint.
    ///
    /// The server spells the owner designation `"Buisnness Owner"`; the
    /// corrected spelling and the canonical identifiers are accepted too.
    pub fn from_server_label(label: &str) -> Option<Role> {
        match label.trim().to_ascii_lowercase().as_str() {
            "owner" | "business owner" | "buisnness owner" => Some(Role::Owner),
            "staff" => Some(Role::Staff),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the canonical role identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Owner" => Ok(Role::Owner),
            "Staff" => Ok(Role::Staff),
            "Student" => Ok(Role::Student),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
