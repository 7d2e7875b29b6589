//! Physical copy model and status codes

use serde::{Deserialize, Serialize};

/// Stored copy status.
///
/// This is a cached hint kept for browsing views; the authoritative
/// lendability signal is the absence of an open loan (see
/// `services::availability`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyStatus {
    Available,
    Unavailable,
}

impl CopyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "AVAILABLE",
            CopyStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CopyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Ok(CopyStatus::Available),
            "UNAVAILABLE" => Ok(CopyStatus::Unavailable),
            _ => Err(format!("Invalid copy status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Copy {
    pub id: i32,
    pub book_id: i32,
    /// Inventory code, unique across all copies
    pub internal_code: String,
    pub status: CopyStatus,
}
