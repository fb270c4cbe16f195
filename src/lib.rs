//! Travel Search Skills Library
//!
//! Flight and hotel search skills for an external skill harness. Each skill
//! reads one JSON document from stdin, searches the Amadeus API (or serves
//! mock data when no credentials are set) and writes one framed JSON
//! response to stdout.

pub mod config;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{Settings, SkillManifest};
pub use handlers::{execute, respond, run_skill};
pub use models::{FlightResult, HotelResult, SkillResponse};
pub use providers::{FlightSearch, HotelSearch, SearchProvider};
pub use utils::error::{SkillError, SkillResult};

/// Version reported in every skill response
pub const SKILL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, SKILL_VERSION)
}
