//! User model and library roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Library roles with their loan quotas.
///
/// The quota mapping is fixed in this version; it is deliberately a plain
/// match so it can be read and tested at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LibraryRole {
    Reader,
    Librarian,
    Admin,
}

impl LibraryRole {
    /// Maximum number of simultaneous open loans for this role
    pub fn loan_limit(&self) -> i64 {
        match self {
            LibraryRole::Reader => 5,
            LibraryRole::Librarian => 10,
            LibraryRole::Admin => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryRole::Reader => "READER",
            LibraryRole::Librarian => "LIBRARIAN",
            LibraryRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for LibraryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LibraryRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "READER" => Ok(LibraryRole::Reader),
            "LIBRARIAN" => Ok(LibraryRole::Librarian),
            "ADMIN" => Ok(LibraryRole::Admin),
            _ => Err(format!("Invalid library role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users
    pub email: String,
    /// Optional; unique when present
    pub phone: Option<String>,
    pub address: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    pub role: LibraryRole,
    pub active: bool,
}
