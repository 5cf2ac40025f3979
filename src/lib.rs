//! KrutAI Auth
//!
//! API key validation in front of a pluggable authentication provider:
//! - Synchronous API key format checks
//! - Remote key validation (stub or HTTP endpoint)
//! - A memoizing checker that de-duplicates in-flight validations
//! - An auth client that gates the provider behind a validated key

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    check_format, check_with_service, ApiKey, ApiKeyError, ApiKeyFormatError, AuthError,
    AuthProvider, AuthProviderFactory, AuthSession, RemoteValidator, ServiceError,
};
pub use infrastructure::api_key::{
    build_validator, make_checker, ApiKeyChecker, CheckerState, HttpValidator, StubValidator,
};
pub use infrastructure::auth::{AuthClient, AuthClientConfig};

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package identity as reported to embedding applications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

pub const METADATA: Metadata = Metadata {
    name: env!("CARGO_PKG_NAME"),
    version: VERSION,
    description: env!("CARGO_PKG_DESCRIPTION"),
};
