//! API key format validation

use thiserror::Error;

/// Minimum number of characters a key must have before it is sent anywhere
pub const MIN_API_KEY_LENGTH: usize = 10;

/// Errors that can occur during API key format validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiKeyFormatError {
    #[error("API key is required. Please provide a valid API key")]
    Missing,

    #[error("API key cannot be empty or whitespace")]
    Blank,

    #[error("API key must be at least {min} characters long (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Check the format of a candidate API key
///
/// Rules:
/// - Must be present and non-empty
/// - Must contain something other than whitespace
/// - Must be at least 10 characters long
///
/// This never performs I/O and must run before any remote check.
pub fn check_format(key: Option<&str>) -> Result<(), ApiKeyFormatError> {
    let key = match key {
        Some(key) if !key.is_empty() => key,
        _ => return Err(ApiKeyFormatError::Missing),
    };

    if key.trim().is_empty() {
        return Err(ApiKeyFormatError::Blank);
    }

    let actual = key.chars().count();

    if actual < MIN_API_KEY_LENGTH {
        return Err(ApiKeyFormatError::TooShort {
            min: MIN_API_KEY_LENGTH,
            actual,
        });
    }

    Ok(())
}
