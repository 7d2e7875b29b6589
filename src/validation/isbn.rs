//! ISBN-10 / ISBN-13 identifier validation
//!
//! Validates the control digit after stripping an optional `ISBN` prefix
//! and all hyphens and spaces.

/// Why an ISBN candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnError {
    /// Wrong length or a non-digit character in a weighted position
    Malformed,
    /// Well-formed candidate whose control digit does not match
    BadChecksum,
}

/// Validate an ISBN-10 or ISBN-13.
///
/// Tolerates an `ISBN`/`ISBN-10`/`ISBN-13` prefix (with optional colon) and
/// any mix of hyphens and spaces. Never panics; malformed input returns
/// false.
pub fn is_valid_isbn(raw: &str) -> bool {
    check_isbn(raw).is_ok()
}

/// Validate an ISBN candidate, distinguishing a malformed string from a
/// well-formed one that fails its control-digit check.
pub fn check_isbn(raw: &str) -> Result<(), IsbnError> {
    let normalized = normalize(raw);
    match normalized.len() {
        10 => check_isbn10(&normalized),
        13 => check_isbn13(&normalized),
        _ => Err(IsbnError::Malformed),
    }
}

/// Strip the optional prefix and all hyphens/spaces.
fn normalize(raw: &str) -> Vec<char> {
    let mut rest = raw.trim();
    if rest.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("ISBN")) {
        rest = &rest[4..];
        if rest.starts_with("-10") || rest.starts_with("-13") {
            rest = &rest[3..];
        }
        rest = rest.strip_prefix(':').unwrap_or(rest);
    }
    rest.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Digits 1..=9 weighted by position; the 10th character is a digit or `X`
/// (worth 10). Valid iff the weighted sum mod 11 equals the control value.
fn check_isbn10(chars: &[char]) -> Result<(), IsbnError> {
    let mut sum = 0u32;
    for (i, c) in chars[..9].iter().enumerate() {
        match c.to_digit(10) {
            Some(d) => sum += d * (i as u32 + 1),
            None => return Err(IsbnError::Malformed),
        }
    }
    let control = match chars[9] {
        'X' | 'x' => 10,
        c => c.to_digit(10).ok_or(IsbnError::Malformed)?,
    };
    if sum % 11 == control {
        Ok(())
    } else {
        Err(IsbnError::BadChecksum)
    }
}

/// Digits 1..=12 weighted 1,3,1,3,...; the 13th digit must equal
/// `(10 - sum mod 10) mod 10`.
fn check_isbn13(chars: &[char]) -> Result<(), IsbnError> {
    let mut sum = 0u32;
    for (i, c) in chars[..12].iter().enumerate() {
        let digit = c.to_digit(10).ok_or(IsbnError::Malformed)?;
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    let control = chars[12].to_digit(10).ok_or(IsbnError::Malformed)?;
    if (10 - sum % 10) % 10 == control {
        Ok(())
    } else {
        Err(IsbnError::BadChecksum)
    }
}
