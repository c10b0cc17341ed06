//! Token endpoint client

use super::types::{AuthContext, OAuthCredentials};
use crate::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Fetches bearer tokens with the client-credentials grant
#[derive(Debug, Clone, Default)]
pub struct TokenClient {
    http_client: Client,
}

impl TokenClient {
    /// Create a token client with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a token once; any non-2xx status is an authentication error
    pub async fn fetch_token(&self, credentials: &OAuthCredentials) -> Result<AuthContext> {
        let request = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
        };

        let response = self
            .http_client
            .post(&credentials.token_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Token request to {} failed with {}", credentials.token_url, status);
            return Err(Error::authentication(status, body));
        }

        let token_response: TokenResponse = response.json().await?;
        info!("Obtained access token from {}", credentials.token_url);
        Ok(token_response.into_context())
    }
}

/// Client-credentials request body
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: Option<String>,
}

impl TokenResponse {
    fn into_context(self) -> AuthContext {
        match self.expires_in {
            Some(secs) => AuthContext::expires_in(self.access_token, secs),
            None => AuthContext::new(self.access_token),
        }
    }
}
