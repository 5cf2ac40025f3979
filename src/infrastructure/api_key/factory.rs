//! Validator factory for runtime selection

use std::sync::Arc;
use std::time::Duration;

use crate::config::ValidationConfig;
use crate::domain::api_key::{RemoteValidator, ServiceError};

use super::http::HttpValidator;
use super::stub::StubValidator;

/// Build the remote validator described by the configuration
///
/// An endpoint selects the HTTP validator; without one every format-valid
/// key is accepted.
pub fn build_validator(config: &ValidationConfig) -> Result<Arc<dyn RemoteValidator>, ServiceError> {
    match config.endpoint.as_deref().map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => {
            let timeout = Duration::from_secs(config.timeout_secs);
            let validator = HttpValidator::with_timeout(endpoint, timeout)?;
            Ok(Arc::new(validator))
        }
        _ => Ok(Arc::new(StubValidator::new())),
    }
}
