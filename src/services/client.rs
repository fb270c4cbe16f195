//! HTTP client service
//!
//! Encapsulates HTTP communication with the Amadeus API and maps transport
//! and status failures onto the skill error taxonomy

use crate::config::AmadeusConfig;
use crate::services::auth::AccessToken;
use crate::utils::error::{helpers, SkillError, SkillResult};
use crate::utils::logging::{truncate_content, MAX_LOGGED_BODY};
use anyhow::Context;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Amadeus API client
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    client: Client,
    base_url: String,
    auth_timeout: Duration,
    search_timeout: Duration,
}

impl AmadeusClient {
    /// Create a new client instance
    pub fn new(config: &AmadeusConfig) -> SkillResult<Self> {
        // Redirects stay off so a response can never move us to an
        // undeclared host.
        let client = Client::builder()
            .user_agent(concat!("travel-skills/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_timeout: config.auth_timeout(),
            search_timeout: config.search_timeout(),
        })
    }

    /// Build the request URL
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST a form-encoded body with the auth timeout
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> SkillResult<T> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let request = self
            .client
            .post(&url)
            .timeout(self.auth_timeout)
            .form(form);

        self.execute(request, path).await
    }

    /// GET with bearer authorization and the search timeout
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AccessToken,
        query: &[(&str, String)],
    ) -> SkillResult<T> {
        let url = self.build_url(path);
        debug!("GET {} ({} query params)", url, query.len());

        let request = self
            .client
            .get(&url)
            .timeout(self.search_timeout)
            .bearer_auth(token.as_str())
            .query(query);

        self.execute(request, path).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> SkillResult<T> {
        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed before a response: {}", path, e);
            SkillError::Transport(e)
        })?;

        self.handle_response(response, path).await
    }

    /// Handle HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        path: &str,
    ) -> SkillResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Amadeus API request to {} failed: {} - {}",
                path,
                status,
                truncate_content(&body, MAX_LOGGED_BODY)
            );
            return Err(SkillError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", path, e);
            SkillError::Transport(e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to parse response from {}: {}", path, e);
            helpers::bad_response(format!("{}: {}", path, e))
        })
    }
}
