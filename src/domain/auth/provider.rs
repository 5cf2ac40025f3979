//! External authentication provider seam

use std::sync::Arc;

use async_trait::async_trait;

use super::{AuthSession, SignInRequest};
use crate::domain::AuthError;

#[cfg(test)]
use mockall::automock;

/// Options handed to the provider when it is constructed
pub type ProviderOptions = serde_json::Value;

/// An external authentication provider instance
///
/// Session management, credential storage and OAuth flows all live behind
/// this trait; the client only forwards to it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign a user in and open a session
    async fn sign_in(&self, request: &SignInRequest) -> Result<AuthSession, AuthError>;

    /// End a session
    async fn sign_out(&self, session_id: &str) -> Result<(), AuthError>;

    /// Look up the session behind a session token
    async fn get_session(&self, token: &str) -> Result<Option<AuthSession>, AuthError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

/// Builds provider instances from options
#[cfg_attr(test, automock)]
pub trait AuthProviderFactory: Send + Sync {
    fn create(&self, options: &ProviderOptions) -> Result<Arc<dyn AuthProvider>, AuthError>;
}
