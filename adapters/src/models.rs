//! Data models for the `adapters` crate.
//!
//! These models are the store-agnostic representation of an account's
//! credentials, shared by every backend and by the authentication flows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Credential partition. Administrators and standard accounts live in
/// separate namespaces; the same email may appear once in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Standard,
    Admin,
}

impl Role {
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Role::Admin
        } else {
            Role::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Role::Standard),
            "admin" => Ok(Role::Admin),
            other => Err(StoreError::Corrupt(format!("unknown role '{}'", other))),
        }
    }
}

/// A stored account credential. `password_hash` is the hasher's output,
/// never the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

// Keeps the hash out of log lines.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// A record waiting for its id.
#[derive(Clone)]
pub struct NewCredential {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewCredential {
    pub fn with_id(self, id: u64) -> CredentialRecord {
        CredentialRecord {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}
