//! Session types returned by auth providers

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials for an email/password sign-in
#[derive(Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider specific fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Session metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub expires_at: DateTime<Utc>,
    /// Provider specific fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// An authenticated session as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub session: SessionInfo,
}

impl AuthSession {
    pub fn session_id(&self) -> &str {
        &self.session.id
    }

    pub fn is_expired(&self) -> bool {
        self.session.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> AuthSession {
        AuthSession {
            user: SessionUser {
                id: "user-1".to_string(),
                email: "ada@example.com".to_string(),
                name: Some("Ada".to_string()),
                extra: HashMap::new(),
            },
            session: SessionInfo {
                id: "session-1".to_string(),
                expires_at,
                extra: HashMap::new(),
            },
        }
    }

    #[test]
    fn test_expiry() {
        assert!(!session(Utc::now() + Duration::hours(1)).is_expired());
        assert!(session(Utc::now() - Duration::seconds(1)).is_expired());
    }

    #[test]
    fn test_deserialize_keeps_extra_fields() {
        let json = serde_json::json!({
            "user": {
                "id": "user-1",
                "email": "ada@example.com",
                "emailVerified": true
            },
            "session": {
                "id": "session-1",
                "expiresAt": "2030-01-01T00:00:00Z",
                "ipAddress": "127.0.0.1"
            }
        });

        let session: AuthSession = serde_json::from_value(json).unwrap();

        assert_eq!(session.session_id(), "session-1");
        assert_eq!(session.user.name, None);
        assert_eq!(
            session.user.extra.get("emailVerified"),
            Some(&serde_json::Value::Bool(true))
        );
        assert_eq!(
            session.session.extra.get("ipAddress"),
            Some(&serde_json::Value::String("127.0.0.1".to_string()))
        );
    }

    #[test]
    fn test_sign_in_debug_hides_password() {
        let request = SignInRequest::new("ada@example.com", "hunter2-hunter2");
        let debug = format!("{:?}", request);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
