//! Error handling module
//!
//! Defines the skill error taxonomy and its mapping onto wire error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Skill error types
///
/// Every variant is terminal for the invocation and is rendered as an
/// error envelope by the pipeline.
#[derive(Error, Debug)]
pub enum SkillError {
    /// Required request fields are missing or malformed
    #[error("{0}")]
    InvalidParams(String),

    /// Upstream answered with a non-2xx status
    #[error("Amadeus API returned HTTP {status}")]
    HttpStatus {
        status: u16,
        body: String,
    },

    /// Connection refused, DNS failure or timeout
    #[error("Amadeus API did not respond in time")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered 2xx with a body we cannot use
    #[error("Amadeus API returned an unusable response: {0}")]
    BadResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

/// Error body carried by an error envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code
    pub code: String,
    /// Human readable message
    pub message: String,
}

impl SkillError {
    /// Get the wire error code
    pub fn code(&self) -> String {
        match self {
            SkillError::InvalidParams(_) => "INVALID_PARAMS".to_string(),
            SkillError::HttpStatus { status, .. } => format!("API_HTTP_{}", status),
            SkillError::Transport(_) => "API_TIMEOUT".to_string(),
            SkillError::BadResponse(_) => "API_BAD_RESPONSE".to_string(),
            SkillError::Config(_) => "CONFIG_ERROR".to_string(),
        }
    }

    /// Convert to the envelope error body
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Result type alias
pub type SkillResult<T> = Result<T, SkillError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create an invalid params error naming the fields that were missing
    pub fn missing_params(required: &[&str], missing: &[&str]) -> SkillError {
        SkillError::InvalidParams(format!(
            "Required: {}; missing: {}",
            required.join(", "),
            missing.join(", ")
        ))
    }

    /// Create a bad response error
    pub fn bad_response(message: impl Into<String>) -> SkillError {
        SkillError::BadResponse(message.into())
    }
}
