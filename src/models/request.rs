//! Skill request data models
//!
//! The input document carries its search fields either at the top level or
//! under `params`, plus an optional `config` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed skill input document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillInput {
    /// Resource-specific search fields
    pub params: Map<String, Value>,
    /// Invocation options
    pub config: SearchConfig,
}

/// Invocation options from the `config` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of offers requested upstream
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

/// Flight search parameters as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightParams {
    /// IATA origin code
    #[serde(default)]
    pub origin: Option<String>,
    /// IATA destination code
    #[serde(default)]
    pub destination: Option<String>,
    /// Departure date (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
    /// Number of adult passengers
    #[serde(default = "default_party_size")]
    pub passengers: u32,
    /// Travel class
    #[serde(default = "default_cabin")]
    pub cabin: String,
}

/// Hotel search parameters as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelParams {
    /// IATA city code
    #[serde(default)]
    pub city_code: Option<String>,
    /// Check-in date (YYYY-MM-DD)
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out date (YYYY-MM-DD)
    #[serde(default)]
    pub check_out: Option<String>,
    /// Number of adult guests
    #[serde(default = "default_party_size")]
    pub guests: u32,
}

fn default_party_size() -> u32 {
    1
}

fn default_cabin() -> String {
    "ECONOMY".to_string()
}

/// Validated flight query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub passengers: u32,
    pub cabin: String,
    pub max_results: u32,
}

/// Validated hotel query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelQuery {
    pub city_code: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl SkillInput {
    /// Build from a raw input document
    ///
    /// A `params` object wins over the top level. Non-object documents
    /// yield an empty input. A malformed `config` falls back to defaults.
    pub fn from_value(document: Value) -> Self {
        let mut root = match document {
            Value::Object(map) => map,
            _ => return Self::default(),
        };

        let config = root
            .get("config")
            .cloned()
            .and_then(|c| serde_json::from_value::<SearchConfig>(c).ok())
            .unwrap_or_default();

        let params = match root.remove("params") {
            Some(Value::Object(params)) => params,
            Some(other) => {
                root.insert("params".to_string(), other);
                root
            }
            None => root,
        };

        Self { params, config }
    }
}
