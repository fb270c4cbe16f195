//! OAuth2 client-credentials exchange
//!
//! One token per invocation. The token is never cached or written anywhere.

use crate::config::Credentials;
use crate::models::amadeus::TokenResponse;
use crate::services::client::AmadeusClient;
use crate::utils::error::{helpers, SkillResult};
use std::fmt;
use tracing::{debug, info};

/// Token endpoint path
pub const TOKEN_PATH: &str = "/v1/security/oauth2/token";

/// Opaque bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Client for the token exchange
#[derive(Debug)]
pub struct AuthClient<'a> {
    client: &'a AmadeusClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(client: &'a AmadeusClient) -> Self {
        Self { client }
    }

    /// Exchange the key/secret pair for a bearer token
    pub async fn exchange(&self, credentials: &Credentials) -> SkillResult<AccessToken> {
        debug!("Requesting Amadeus access token");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.api_key.as_str()),
            ("client_secret", credentials.api_secret.as_str()),
        ];

        let response: TokenResponse = self.client.post_form(TOKEN_PATH, &form).await?;

        if response.access_token.is_empty() {
            return Err(helpers::bad_response("token endpoint returned an empty access_token"));
        }

        info!(
            "Obtained Amadeus access token (expires in {}s)",
            response.expires_in.unwrap_or_default()
        );

        Ok(AccessToken::new(response.access_token))
    }
}
