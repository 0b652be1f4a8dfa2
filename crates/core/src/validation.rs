//! Request validation helpers shared by the HTTP handlers and the repository

use crate::errors::{CoreError, CoreResult};
use thiserror::Error;

/// Message used when a name is missing or blank
pub const NAME_REQUIRED: &str = "Name is required.";

/// True when the value is empty or made only of whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Require a non-null, non-blank name and hand it back unchanged
pub fn validate_name<'a>(name: Option<&'a str>, message: &str) -> CoreResult<&'a str> {
    match name {
        Some(value) if !is_blank(value) => Ok(value),
        _ => Err(CoreError::validation(message)),
    }
}

/// Reasons a route id can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserIdError {
    #[error("User ID is required.")]
    Missing,

    #[error("User ID must be a valid number.")]
    NotANumber,

    #[error("User ID must be a positive number.")]
    Negative,
}

/// Parse a raw id segment. Zero is accepted; surrounding whitespace is ignored.
pub fn parse_user_id(raw: Option<&str>) -> Result<i32, UserIdError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value.trim(),
        _ => return Err(UserIdError::Missing),
    };

    let id = raw.parse::<i32>().map_err(|_| UserIdError::NotANumber)?;
    if id < 0 {
        return Err(UserIdError::Negative);
    }

    Ok(id)
}
