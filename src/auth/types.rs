//! Auth configuration types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-credentials settings for the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthCredentials {
    /// Token endpoint URL
    pub token_url: String,
    /// Client ID
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
}

impl Default for OAuthCredentials {
    fn default() -> Self {
        Self {
            token_url: "https://auth.example.com/oauth/token".to_string(),
            client_id: "your-client-id".to_string(),
            client_secret: "your-client-secret".to_string(),
        }
    }
}

/// Bearer token produced by the setup phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// The access token
    pub access_token: String,
    /// When the token expires, if the endpoint said so
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    /// Create a context for a token with no known expiry
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Create a context for a token that expires in N seconds from now
    pub fn expires_in(access_token: impl Into<String>, seconds: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(Utc::now() + chrono::Duration::seconds(seconds)),
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + chrono::Duration::seconds(30) >= expires_at,
            None => false,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let ctx = AuthContext::new("abc123");
        assert_eq!(ctx.bearer_header(), "Bearer abc123");
    }

    #[test]
    fn test_expiry() {
        assert!(!AuthContext::expires_in("t", 3600).is_expired());
        assert!(AuthContext::expires_in("t", -100).is_expired());
        assert!(!AuthContext::new("t").is_expired());
    }

    #[test]
    fn test_credentials_default() {
        let creds = OAuthCredentials::default();
        assert_eq!(creds.token_url, "https://auth.example.com/oauth/token");
        assert_eq!(creds.client_id, "your-client-id");
    }
}
