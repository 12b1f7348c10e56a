//! Validation of user-typed values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidthError {
    #[error("Width must be an integer, got '{0}'.")]
    NotANumber(String),
    #[error("Width must be a positive integer.")]
    NotPositive,
    #[error("Width {0} is too large.")]
    TooLarge(i64),
}

/// Parse a width typed at the prompt.
///
/// Blank input selects `default`. Anything that is not a positive integer is rejected
/// so the caller can ask again.
pub fn parse_width(input: &str, default: u32) -> Result<u32, WidthError> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(default);
    }
    let n: i64 = s
        .parse()
        .map_err(|_| WidthError::NotANumber(s.to_string()))?;
    if n <= 0 {
        return Err(WidthError::NotPositive);
    }
    u32::try_from(n).map_err(|_| WidthError::TooLarge(n))
}

/// Prompt validator for a width field with the given default.
///
/// Returning an error makes the prompt ask again, so blank input must pass.
pub fn width_validator(default: u32) -> impl FnMut(&String) -> Result<(), WidthError> {
    move |s: &String| parse_width(s, default).map(|_| ())
}
