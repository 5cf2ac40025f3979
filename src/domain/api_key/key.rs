//! API key value type

use serde::{Deserialize, Serialize};

use super::validation::{check_format, ApiKeyFormatError};

/// A format-checked API key
///
/// The only way to build one is through [`ApiKey::parse`], so holding an
/// `ApiKey` means the format check already passed. `Debug` and `Display`
/// never print the secret.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new ApiKey after format validation
    pub fn parse(key: impl Into<String>) -> Result<Self, ApiKeyFormatError> {
        let key = key.into();
        check_format(Some(&key))?;
        Ok(Self(key))
    }

    /// Get the raw key, e.g. for an `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Redacted form safe for logs: the first four characters and the length
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}…({} chars)", prefix, self.0.chars().count())
    }
}

impl TryFrom<String> for ApiKey {
    type Error = ApiKeyFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}
