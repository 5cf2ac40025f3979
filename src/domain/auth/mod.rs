//! Authentication provider domain

mod provider;
mod session;

pub use provider::{AuthProvider, AuthProviderFactory, ProviderOptions};
pub use session::{AuthSession, SessionInfo, SessionUser, SignInRequest};

#[cfg(test)]
pub use provider::{MockAuthProvider, MockAuthProviderFactory};
