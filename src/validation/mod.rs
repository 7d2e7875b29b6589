//! Field-level validation primitives
//!
//! Pure predicates shared by the entity services. Cross-record rules
//! (uniqueness, referential existence) live with the services that can
//! reach the repositories.

pub mod isbn;

pub use isbn::{check_isbn, is_valid_isbn, IsbnError};

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ErrorCode, ValidationError};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_!#$%&'*+/=?`{|}~^.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

// National mobile numbers: nine digits starting with 6 or 7
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[67][0-9]{8}$").unwrap());

/// Non-empty after trimming and at least `min_len` characters long
pub fn is_valid_string(value: &str, min_len: usize) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_len
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Both bounds ordered and neither in the future
pub fn is_valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    let today = Utc::now().date_naive();
    start <= end && start <= today && end <= today
}

/// Limit must be positive, offset non-negative
pub fn validate_pagination(limit: i64, offset: i64) -> Result<(), ValidationError> {
    if limit <= 0 {
        return Err(ValidationError::new(
            "limit",
            ErrorCode::RangeViolation,
            "Limit must be greater than 0",
        ));
    }
    if offset < 0 {
        return Err(ValidationError::new(
            "offset",
            ErrorCode::RangeViolation,
            "Offset cannot be negative",
        ));
    }
    Ok(())
}
