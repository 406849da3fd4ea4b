// models/src/user.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EntityId;
use crate::errors::ValidationError;

/// Role tag attached to every platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "user" => Ok(Role::User),
            _ => Err(ValidationError::UnknownRole(s.to_string())),
        }
    }
}

/// A platform account as the console lists it. The email doubles as a
/// natural key where no id is at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

/// Payload for creating a user account. The backing API stores the
/// plaintext password; it never travels back inside `User`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

/// An administrator record on the `/admins` resource. The demo API returns
/// the stored password verbatim, which is what the login scan compares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signup payload for `/admins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}
