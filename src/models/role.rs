//! # Caller Roles
//!
//! Role carried in the JWT access token and checked by handlers. Credential
//! issuance lives outside this service; the role is trusted as signed.

use serde::{Deserialize, Serialize};

/// Role of an authenticated caller.
///
/// Hire mutations require `Parent`; the monthly listing requires `Nanny` or
/// `Admin`; reads of a single hire accept any authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Parent,
    Nanny,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role_str = match self {
            Role::Parent => "parent",
            Role::Nanny => "nanny",
            Role::Admin => "admin",
        };
        write!(f, "{role_str}")
    }
}
