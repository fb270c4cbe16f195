//! Skill configuration settings
//!
//! Defines configuration structures and loading logic. Values come from the
//! environment (optionally seeded from a `.env` file) and are read once per
//! invocation.

use super::manifest::{SkillManifest, AMADEUS_BASE_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Main skill configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Amadeus API configuration
    pub amadeus: AmadeusConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Why the Amadeus section is unusable, if it is
    pub amadeus_error: Option<String>,
    /// Non-fatal problems found while loading
    pub warnings: Vec<String>,
}

/// Amadeus API configuration
#[derive(Clone)]
pub struct AmadeusConfig {
    /// API key (empty when unset)
    pub api_key: String,
    /// API secret (empty when unset)
    pub api_secret: String,
    /// API base URL
    pub base_url: String,
    /// Token exchange timeout in milliseconds
    pub auth_timeout_ms: u64,
    /// Search request timeout in milliseconds
    pub search_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or env-filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

/// Client credentials for the token exchange
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &crate::utils::logging::mask_secret(&self.api_key))
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for AmadeusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmadeusConfig")
            .field("api_key_set", &!self.api_key.is_empty())
            .field("api_secret_set", &!self.api_secret.is_empty())
            .field("base_url", &self.base_url)
            .field("auth_timeout_ms", &self.auth_timeout_ms)
            .field("search_timeout_ms", &self.search_timeout_ms)
            .finish()
    }
}

impl Default for AmadeusConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: AMADEUS_BASE_URL.to_string(),
            auth_timeout_ms: 10_000,
            search_timeout_ms: 15_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AmadeusConfig {
    /// Credentials, present only when both key and secret are non-empty
    pub fn credentials(&self) -> Option<Credentials> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            return None;
        }

        Some(Credentials {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
        })
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_timeout_ms)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }
}

/// Accepted values of `LOG_FORMAT`
const LOG_FORMATS: [&str; 2] = ["text", "json"];

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new(manifest: &SkillManifest) -> Self {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(manifest, |key| std::env::var(key).ok())
    }

    /// Create a configuration instance from an arbitrary variable lookup
    ///
    /// Loading never fails. A bad log format falls back to the default with
    /// a warning; a bad Amadeus section is kept in `amadeus_error` and only
    /// matters once the live path is chosen.
    pub fn from_lookup<F>(manifest: &SkillManifest, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let mut warnings = Vec::new();

        let mut logging = LoggingConfig {
            level: get_or_default("RUST_LOG", "info"),
            format: get_or_default("LOG_FORMAT", "text"),
        };
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            warnings.push(format!(
                "Invalid LOG_FORMAT '{}', falling back to text",
                logging.format
            ));
            logging.format = LoggingConfig::default().format;
        }

        let mut amadeus = AmadeusConfig {
            api_key: get_or_default("AMADEUS_API_KEY", "").trim().to_string(),
            api_secret: get_or_default("AMADEUS_API_SECRET", "").trim().to_string(),
            base_url: get_or_default("AMADEUS_BASE_URL", AMADEUS_BASE_URL),
            ..AmadeusConfig::default()
        };

        let timeouts = parse_timeout(&lookup, "AMADEUS_AUTH_TIMEOUT_MS", amadeus.auth_timeout_ms)
            .and_then(|auth| {
                parse_timeout(&lookup, "AMADEUS_SEARCH_TIMEOUT_MS", amadeus.search_timeout_ms)
                    .map(|search| (auth, search))
            });

        let amadeus_error = match timeouts {
            Ok((auth, search)) => {
                amadeus.auth_timeout_ms = auth;
                amadeus.search_timeout_ms = search;
                amadeus.validate(manifest).err()
            }
            Err(e) => Some(e),
        }
        .map(|e| format!("{:#}", e));

        Self {
            amadeus,
            logging,
            amadeus_error,
            warnings,
        }
    }

    /// Fail if the Amadeus section could not be used for a live search
    pub fn ensure_live_ready(&self) -> Result<()> {
        match &self.amadeus_error {
            Some(problem) => anyhow::bail!("{}", problem),
            None => Ok(()),
        }
    }
}

impl AmadeusConfig {
    /// Validate the upstream endpoint and timeouts
    pub fn validate(&self, manifest: &SkillManifest) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid AMADEUS_BASE_URL: {}", self.base_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Invalid Amadeus base URL scheme, should be http or https");
        }

        let host = url.host_str().unwrap_or_default();
        if !manifest.allows_host(host) {
            anyhow::bail!(
                "Amadeus host '{}' is outside the declared egress list for {}",
                host,
                manifest.name
            );
        }

        if self.auth_timeout_ms == 0 || self.search_timeout_ms == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        Ok(())
    }
}

fn parse_timeout<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {} value", key)),
        None => Ok(default),
    }
}
