//! HTTP validation endpoint client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::domain::api_key::{ApiKey, RemoteValidator, ServiceError};

/// Validator that asks a remote HTTP endpoint about the key
///
/// Sends `POST <endpoint>` with the key as bearer token and in the JSON body.
/// A 2xx answer accepts the key, 401/403 rejects it and anything else is a
/// service failure.
#[derive(Debug, Clone)]
pub struct HttpValidator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpValidator {
    /// Create a validator for an absolute `http`/`https` endpoint
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let endpoint = endpoint.into();
        let url = reqwest::Url::parse(&endpoint).map_err(|e| {
            ServiceError::with_source(format!("Invalid validation endpoint '{}'", endpoint), e)
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServiceError::new(format!(
                "Invalid validation endpoint '{}': unsupported scheme '{}'",
                endpoint,
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::with_source("Failed to build HTTP client", e))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteValidator for HttpValidator {
    async fn check(&self, key: &ApiKey) -> Result<bool, ServiceError> {
        debug!(endpoint = %self.endpoint, key = %key, "Validating API key with service");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(key.expose())
            .json(&serde_json::json!({ "api_key": key.expose() }))
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Validation request failed");
                ServiceError::with_source(format!("Request to {} failed", self.endpoint), e)
            })?;

        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(endpoint = %self.endpoint, %status, "API key rejected by service");
            return Ok(false);
        }

        let error_body = response.text().await.unwrap_or_default();
        warn!(endpoint = %self.endpoint, %status, "Validation service returned an error");

        Err(ServiceError::new(format!("HTTP {}: {}", status, error_body)))
    }

    fn validator_name(&self) -> &'static str {
        "http"
    }
}
