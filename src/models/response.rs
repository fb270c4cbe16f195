//! Skill response data models
//!
//! Defines the response envelope and the normalized result records

use crate::utils::error::ErrorBody;
use serde::{Deserialize, Serialize};

/// Literal `source_api` value for mock results
pub const MOCK_SOURCE: &str = "mock";

/// Top-level skill response
///
/// Success and error are separate variants, so a response carries either
/// `results` or `error` and never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SkillResponse<T> {
    Success {
        skill: String,
        version: String,
        results: Vec<T>,
        metadata: Metadata,
    },
    Error {
        skill: String,
        version: String,
        error: ErrorBody,
    },
}

/// Response metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Wall-clock time spent producing results
    pub query_time_ms: u64,
    /// Upstream hostname or "mock"
    pub source_api: String,
    /// Always false; nothing is cached across invocations
    pub cached: bool,
}

/// Price of a flight offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    /// ISO-4217 currency code
    pub currency: String,
}

/// Price of a hotel offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPrice {
    /// Total for the stay
    pub amount: f64,
    /// ISO-4217 currency code
    pub currency: String,
    /// Nightly base rate
    pub per_night: f64,
}

/// Normalized flight offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightResult {
    pub provider: String,
    /// Carrier code of the first segment
    pub airline: String,
    pub price: Price,
    pub departure: String,
    pub arrival: String,
    pub stops: u32,
    pub duration_minutes: u32,
}

/// Normalized hotel offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelResult {
    pub provider: String,
    pub name: String,
    pub hotel_id: String,
    pub rating: String,
    pub price: HotelPrice,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
}

impl<T> SkillResponse<T> {
    /// Build a success envelope
    pub fn success(skill: &str, version: &str, results: Vec<T>, metadata: Metadata) -> Self {
        SkillResponse::Success {
            skill: skill.to_string(),
            version: version.to_string(),
            results,
            metadata,
        }
    }

    /// Build an error envelope
    pub fn error(skill: &str, version: &str, error: ErrorBody) -> Self {
        SkillResponse::Error {
            skill: skill.to_string(),
            version: version.to_string(),
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SkillResponse::Success { .. })
    }

    /// Results of a success envelope
    pub fn results(&self) -> Option<&[T]> {
        match self {
            SkillResponse::Success { results, .. } => Some(results.as_slice()),
            SkillResponse::Error { .. } => None,
        }
    }

    /// Metadata of a success envelope
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            SkillResponse::Success { metadata, .. } => Some(metadata),
            SkillResponse::Error { .. } => None,
        }
    }

    /// Error body of an error envelope
    pub fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            SkillResponse::Error { error, .. } => Some(error),
            SkillResponse::Success { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_has_no_results() {
        let response: SkillResponse<FlightResult> = SkillResponse::error(
            "flight-search",
            "0.1.0",
            ErrorBody {
                code: "API_TIMEOUT".to_string(),
                message: "Amadeus API did not respond in time".to_string(),
            },
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"]["code"], "API_TIMEOUT");
        assert!(value.get("results").is_none());
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_success_envelope_shape() {
        let response = SkillResponse::success(
            "hotel-search",
            "0.1.0",
            Vec::<HotelResult>::new(),
            Metadata {
                query_time_ms: 3,
                source_api: MOCK_SOURCE.to_string(),
                cached: false,
            },
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "skill": "hotel-search",
                "version": "0.1.0",
                "results": [],
                "metadata": {"query_time_ms": 3, "source_api": "mock", "cached": false}
            })
        );
        assert!(value.get("error").is_none());
    }
}
