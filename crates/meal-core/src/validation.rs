//! # Validation Module
//!
//! Turns raw answer tokens into typed values.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Answer kind     Accepted                       Otherwise               │
//! │  ─────────────   ─────────────────────────────  ─────────────────────── │
//! │  Menu number     any whole number               InvalidNumber error     │
//! │                  (out of range = "None")                                │
//! │  Spoon count     any whole number, even < 0     InvalidNumber error     │
//! │  yes / no        "yes" in any letter case       treated as "no"         │
//! │  Sweetener       any token                      -                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use meal_core::validation::{is_yes, parse_whole};
//!
//! assert_eq!(parse_whole::<i64>("burger", " 2 ").unwrap(), 2);
//! assert!(parse_whole::<i32>("spoons", "two").is_err());
//! assert!(is_yes("YES"));
//! assert!(!is_yes("y"));
//! ```

use std::str::FromStr;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a whole number answer.
///
/// Range checks are left to the caller: an out-of-range menu number is a
/// valid "nothing selected" answer, not an error.
pub fn parse_whole<T: FromStr>(field: &str, token: &str) -> ValidationResult<T> {
    token
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: token.to_string(),
        })
}

/// Returns true only for an explicit "yes" (any letter case).
pub fn is_yes(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_accepts_numbers() {
        assert_eq!(parse_whole::<i64>("drink", "5").unwrap(), 5);
        assert_eq!(parse_whole::<i64>("drink", "42").unwrap(), 42);
        assert_eq!(parse_whole::<i32>("spoons", "-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_whole_rejects_text() {
        let err = parse_whole::<i64>("burger", "veg").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: "burger".to_string(),
                value: "veg".to_string(),
            }
        );
        assert!(parse_whole::<i32>("spoons", "1.5").is_err());
        assert!(parse_whole::<i32>("spoons", "").is_err());
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes"));
        assert!(is_yes("Yes"));
        assert!(is_yes(" yEs "));
        assert!(!is_yes("no"));
        assert!(!is_yes("y"));
        assert!(!is_yes("yess"));
        assert!(!is_yes(""));
    }
}
