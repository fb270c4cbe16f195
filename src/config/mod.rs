//! Configuration management module
//!
//! Responsible for loading skill configuration from the environment and
//! holding each skill's declared security manifest.

pub mod manifest;
pub mod settings;

pub use manifest::{SkillManifest, AMADEUS_HOST, FLIGHT_SEARCH_MANIFEST, HOTEL_SEARCH_MANIFEST};
pub use settings::{AmadeusConfig, Credentials, LoggingConfig, Settings};
