//! Input validation primitives.
//!
//! These replace verbose ok_or_else + Error::validation_invalid_argument chains.

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Reject values containing whitespace, control characters, or path separators.
pub fn require_plain_name<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let invalid: Vec<String> = value
        .chars()
        .filter(|c| c.is_whitespace() || c.is_control() || *c == '/' || *c == '\\')
        .map(|c| format!("{:?}", c))
        .collect();

    if invalid.is_empty() {
        Ok(value)
    } else {
        Err(Error::validation_invalid_argument(
            field,
            "Name contains whitespace or path separators",
            Some(value.to_string()),
            Some(invalid),
        ))
    }
}
