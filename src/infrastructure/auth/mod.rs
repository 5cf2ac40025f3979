//! Authentication client module
//!
//! This module provides the API-key gated client in front of the external
//! auth provider.

mod client;

pub use client::{AuthClient, AuthClientConfig};
