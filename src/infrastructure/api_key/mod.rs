//! API Key infrastructure implementations
//!
//! This module provides the remote validators (stub and HTTP endpoint),
//! the factory choosing between them and the memoizing checker.

mod checker;
mod factory;
mod http;
mod stub;

pub use checker::{make_checker, ApiKeyChecker, CheckerState};
pub use factory::build_validator;
pub use http::HttpValidator;
pub use stub::StubValidator;
