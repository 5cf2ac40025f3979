//! API-key gated authentication client

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::ValidationConfig;
use crate::domain::api_key::{check_format, ApiKey, RemoteValidator};
use crate::domain::auth::{
    AuthProvider, AuthProviderFactory, AuthSession, ProviderOptions, SignInRequest,
};
use crate::domain::AuthError;
use crate::infrastructure::api_key::{build_validator, ApiKeyChecker};

fn default_validate_on_init() -> bool {
    true
}

/// Configuration for the auth client
#[derive(Debug, Clone, Deserialize)]
pub struct AuthClientConfig {
    /// API key for the KrutAI services
    pub api_key: Option<String>,
    /// Options passed through to the auth provider factory
    #[serde(default)]
    pub provider_options: ProviderOptions,
    /// Confirm the key with the validation service during `initialize()`
    #[serde(default = "default_validate_on_init")]
    pub validate_on_init: bool,
    /// Custom validation endpoint
    #[serde(default)]
    pub validation_endpoint: Option<String>,
}

impl AuthClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            provider_options: ProviderOptions::Null,
            validate_on_init: true,
            validation_endpoint: None,
        }
    }

    pub fn with_provider_options(mut self, options: ProviderOptions) -> Self {
        self.provider_options = options;
        self
    }

    pub fn with_validate_on_init(mut self, validate_on_init: bool) -> Self {
        self.validate_on_init = validate_on_init;
        self
    }

    pub fn with_validation_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.validation_endpoint = Some(endpoint.into());
        self
    }
}

/// Authentication client that validates an API key before handing out
/// the underlying auth provider
pub struct AuthClient {
    api_key: ApiKey,
    provider_options: ProviderOptions,
    validate_on_init: bool,
    checker: ApiKeyChecker,
    factory: Arc<dyn AuthProviderFactory>,
    provider: OnceCell<Arc<dyn AuthProvider>>,
    initialized: AtomicBool,
    rejected: AtomicBool,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("api_key", &self.api_key)
            .field("validate_on_init", &self.validate_on_init)
            .field("has_provider", &self.provider.initialized())
            .field("initialized", &self.is_initialized())
            .field("rejected", &self.rejected.load(Ordering::SeqCst))
            .finish()
    }
}

impl AuthClient {
    /// Create a client, checking the API key format immediately
    ///
    /// With `validate_on_init` disabled the provider is created right away
    /// and no remote check is ever made during `initialize()`.
    pub fn new(
        config: AuthClientConfig,
        factory: Arc<dyn AuthProviderFactory>,
        validator: Arc<dyn RemoteValidator>,
    ) -> Result<Self, AuthError> {
        check_format(config.api_key.as_deref())?;
        let api_key = ApiKey::parse(config.api_key.unwrap_or_default())?;

        let provider = if config.validate_on_init {
            OnceCell::new()
        } else {
            OnceCell::new_with(Some(factory.create(&config.provider_options)?))
        };

        debug!(
            api_key = %api_key,
            validator = validator.validator_name(),
            validate_on_init = config.validate_on_init,
            "Auth client created"
        );

        Ok(Self {
            checker: ApiKeyChecker::new(api_key.clone(), validator),
            api_key,
            provider_options: config.provider_options,
            validate_on_init: config.validate_on_init,
            factory,
            provider,
            initialized: AtomicBool::new(false),
            rejected: AtomicBool::new(false),
        })
    }

    /// Create a client whose validator is chosen from `validation_endpoint`
    pub fn from_config(
        config: AuthClientConfig,
        factory: Arc<dyn AuthProviderFactory>,
    ) -> Result<Self, AuthError> {
        check_format(config.api_key.as_deref())?;

        let validator = build_validator(&ValidationConfig {
            endpoint: config.validation_endpoint.clone(),
            ..ValidationConfig::default()
        })
        .map_err(|e| AuthError::configuration(e.to_string()))?;

        Self::new(config, factory, validator)
    }

    /// Validate the API key with the service (if enabled) and create the provider
    ///
    /// Calling this again after success is a no-op.
    pub async fn initialize(&self) -> Result<(), AuthError> {
        if self.is_initialized() {
            return Ok(());
        }

        if self.validate_on_init {
            self.ensure_key_accepted().await?;
        }

        self.provider
            .get_or_try_init(|| async { self.factory.create(&self.provider_options) })
            .await?;

        self.initialized.store(true, Ordering::SeqCst);
        info!(api_key = %self.api_key, "Auth client initialized");

        Ok(())
    }

    /// Drop the cached validation outcome and confirm the key again
    ///
    /// A rejected key closes the client: it is no longer initialized and the
    /// provider stays unavailable until a later revalidation succeeds. A
    /// service failure leaves the client as it was.
    pub async fn revalidate(&self) -> Result<(), AuthError> {
        self.checker.reset();

        match self.ensure_key_accepted().await {
            Ok(()) => {
                self.rejected.store(false, Ordering::SeqCst);
                if self.provider.get().is_some() {
                    self.initialized.store(true, Ordering::SeqCst);
                }
                Ok(())
            }
            Err(AuthError::ApiKeyRejected) => {
                self.rejected.store(true, Ordering::SeqCst);
                self.initialized.store(false, Ordering::SeqCst);
                Err(AuthError::ApiKeyRejected)
            }
            Err(e) => Err(e),
        }
    }

    /// Get the auth provider instance
    pub fn provider(&self) -> Result<Arc<dyn AuthProvider>, AuthError> {
        if self.rejected.load(Ordering::SeqCst) {
            return Err(AuthError::ApiKeyRejected);
        }

        self.provider.get().cloned().ok_or(AuthError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Get the API key (useful for making authenticated requests)
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthSession, AuthError> {
        self.provider()?.sign_in(request).await
    }

    pub async fn sign_out(&self, session_id: &str) -> Result<(), AuthError> {
        self.provider()?.sign_out(session_id).await
    }

    pub async fn get_session(&self, token: &str) -> Result<Option<AuthSession>, AuthError> {
        self.provider()?.get_session(token).await
    }

    async fn ensure_key_accepted(&self) -> Result<(), AuthError> {
        if self.checker.validate().await? {
            return Ok(());
        }

        warn!(api_key = %self.api_key, "API key rejected by validation service");
        Err(AuthError::ApiKeyRejected)
    }
}
