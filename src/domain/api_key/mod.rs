//! API Key domain
//!
//! This module provides the API key value type, the synchronous format
//! check, the remote validator seam and the error taxonomy shared by both.

mod error;
mod key;
mod remote;
mod validation;

pub use error::{ApiKeyError, ServiceError};
pub use key::ApiKey;
pub use remote::{check_with_service, RemoteValidator};
pub use validation::{check_format, ApiKeyFormatError, MIN_API_KEY_LENGTH};

#[cfg(test)]
pub use remote::mock;
