use async_trait::async_trait;
use std::fmt::Debug;

use super::error::{ApiKeyError, ServiceError};
use super::key::ApiKey;

/// Trait for remote API key validation authorities (stub, HTTP endpoint, etc.)
#[async_trait]
pub trait RemoteValidator: Send + Sync + Debug {
    /// Ask the authority whether the key is accepted
    ///
    /// `Ok(false)` means the authority answered and rejected the key. A
    /// failure to get an answer at all is a `ServiceError`.
    async fn check(&self, key: &ApiKey) -> Result<bool, ServiceError>;

    /// Get validator name for logging/debugging
    fn validator_name(&self) -> &'static str;
}

/// Format-check a raw key and then confirm it with the remote authority
///
/// The remote validator is never called for a key that fails the format check.
pub async fn check_with_service(
    validator: &dyn RemoteValidator,
    key: &str,
) -> Result<bool, ApiKeyError> {
    let key = ApiKey::parse(key)?;

    Ok(validator.check(&key).await?)
}


#[cfg(test)]
mod tests {
    use super::mock::CountingValidator;
    use super::*;
    use crate::domain::api_key::ApiKeyFormatError;

    #[tokio::test]
    async fn test_valid_key_is_checked_remotely() {
        let validator = CountingValidator::accepting();

        let result = check_with_service(&validator, "valid-api-key-123456").await;

        assert!(result.unwrap());
        assert_eq!(validator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_bad_format_never_reaches_service() {
        let validator = CountingValidator::accepting();

        let result = check_with_service(&validator, "abc").await;

        assert!(matches!(
            result,
            Err(ApiKeyError::Format(ApiKeyFormatError::TooShort { .. }))
        ));
        assert_eq!(validator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejection_is_false_not_error() {
        let validator = CountingValidator::rejecting();

        let result = check_with_service(&validator, "valid-api-key-123456").await;

        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_service_failure_is_not_false() {
        let validator = CountingValidator::failing("connection refused");

        let result = check_with_service(&validator, "valid-api-key-123456").await;

        match result {
            Err(ApiKeyError::Service(e)) => assert_eq!(e.message(), "connection refused"),
            other => panic!("expected service error, got {:?}", other),
        }
    }
}
