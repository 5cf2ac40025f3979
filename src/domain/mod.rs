//! Domain layer - API keys, auth provider seam and errors

pub mod api_key;
pub mod auth;
pub mod error;

pub use api_key::{
    check_format, check_with_service, ApiKey, ApiKeyError, ApiKeyFormatError, RemoteValidator,
    ServiceError, MIN_API_KEY_LENGTH,
};
pub use auth::{
    AuthProvider, AuthProviderFactory, AuthSession, ProviderOptions, SessionInfo, SessionUser,
    SignInRequest,
};
pub use error::AuthError;
