use thiserror::Error;

use crate::domain::api_key::{ApiKeyError, ApiKeyFormatError, ServiceError};

/// Errors surfaced by the authentication client
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    ApiKey(#[from] ApiKeyError),

    #[error("API key was rejected by the validation service")]
    ApiKeyRejected,

    #[error("Auth client not initialized. Call initialize() first or set validate_on_init to false")]
    NotInitialized,

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AuthError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<ApiKeyFormatError> for AuthError {
    fn from(error: ApiKeyFormatError) -> Self {
        Self::ApiKey(error.into())
    }
}

impl From<ServiceError> for AuthError {
    fn from(error: ServiceError) -> Self {
        Self::ApiKey(error.into())
    }
}
