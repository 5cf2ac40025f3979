use async_trait::async_trait;

use crate::domain::api_key::{ApiKey, RemoteValidator, ServiceError};

/// Validator used when no validation endpoint is configured
///
/// Accepts every key that made it past the format check.
#[derive(Debug, Clone, Default)]
pub struct StubValidator;

impl StubValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RemoteValidator for StubValidator {
    async fn check(&self, _key: &ApiKey) -> Result<bool, ServiceError> {
        Ok(true)
    }

    fn validator_name(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_accepts_format_valid_keys() {
        let validator = StubValidator::new();
        let key = ApiKey::parse("valid-api-key-123456").unwrap();

        assert!(validator.check(&key).await.unwrap());
        assert!(validator.check(&key).await.unwrap());
        assert_eq!(validator.validator_name(), "stub");
    }
}
