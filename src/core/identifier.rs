//! Command name folding.
//!
//! Turns user-supplied names such as `my-server` or `db_dump` into bare
//! camelCase identifiers usable as variable and file names in generated code.

use std::borrow::Cow;

use crate::error::Error;
use crate::Result;

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_')
}

/// Remove dashes and underscores, uppercasing the character after each one.
///
/// Consecutive separators collapse, a trailing separator is dropped, and a
/// name without separators is returned borrowed. The result never contains a
/// separator, so a second pass is always the identity.
pub fn sanitize(source: &str) -> Cow<'_, str> {
    let Some(first) = source.find(is_separator) else {
        return Cow::Borrowed(source);
    };

    let mut output = String::with_capacity(source.len());
    output.push_str(&source[..first]);

    let mut chars = source[first..].chars().peekable();
    while let Some(c) = chars.next() {
        if !is_separator(c) {
            output.push(c);
            continue;
        }

        match chars.peek() {
            None => break,
            Some(&next) if is_separator(next) => continue,
            Some(_) => {
                if let Some(next) = chars.next() {
                    output.extend(next.to_uppercase());
                }
            }
        }
    }

    Cow::Owned(output)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Validate the variable name of the parent command a new command registers with.
///
/// Accepts a plain identifier (`rootCmd`) or a package-qualified selector
/// (`cmd.RootCmd`). Letters may be any Unicode letter, matching what
/// `sanitize` can produce.
pub fn validate_parent_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation_invalid_argument(
            "parent",
            "Parent command name cannot be empty",
            None,
            None,
        ));
    }

    if !name.split('.').all(is_identifier) {
        return Err(Error::validation_invalid_argument(
            "parent",
            "Parent command name must be an identifier or package.Identifier",
            Some(name.to_string()),
            None,
        ));
    }

    Ok(())
}
