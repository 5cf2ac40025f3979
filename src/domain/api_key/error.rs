//! API key error taxonomy

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use super::validation::ApiKeyFormatError;

type BoxedCause = Arc<dyn StdError + Send + Sync>;

/// The remote validation authority could not be reached or failed
///
/// The underlying cause is kept as the error source. The error is `Clone`
/// so a single in-flight result can be handed to every waiter.
#[derive(Debug, Clone, Error)]
#[error("API key service error: {message}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any failure of a validation flow
#[derive(Debug, Clone, Error)]
pub enum ApiKeyError {
    #[error(transparent)]
    Format(#[from] ApiKeyFormatError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiKeyError {
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = ServiceError::with_source("validation endpoint unreachable", cause);

        assert_eq!(
            error.to_string(),
            "API key service error: validation endpoint unreachable"
        );
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_service_error_without_source() {
        let error = ServiceError::new("HTTP 500");
        assert!(error.source().is_none());
        assert_eq!(error.message(), "HTTP 500");
    }

    #[test]
    fn test_api_key_error_is_transparent() {
        let format: ApiKeyError = ApiKeyFormatError::Blank.into();
        assert!(format.is_format());
        assert_eq!(format.to_string(), ApiKeyFormatError::Blank.to_string());

        let service: ApiKeyError = ServiceError::new("down").into();
        assert!(service.is_service());
        assert_eq!(service.to_string(), "API key service error: down");
    }

    #[test]
    fn test_clone_shares_source() {
        let cause = std::io::Error::other("timeout");
        let error = ApiKeyError::from(ServiceError::with_source("slow", cause));
        let cloned = error.clone();

        assert_eq!(error.to_string(), cloned.to_string());
        match cloned {
            ApiKeyError::Service(e) => assert!(e.source().is_some()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
