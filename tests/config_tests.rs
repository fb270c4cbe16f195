//! Configuration and manifest tests

use std::collections::HashMap;
use travel_skills::config::{Settings, FLIGHT_SEARCH_MANIFEST, HOTEL_SEARCH_MANIFEST};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults_without_environment() {
    let settings = Settings::from_lookup(&FLIGHT_SEARCH_MANIFEST, lookup(&[]));

    assert_eq!(settings.amadeus.base_url, "https://api.amadeus.com");
    assert_eq!(settings.amadeus.auth_timeout_ms, 10_000);
    assert_eq!(settings.amadeus.search_timeout_ms, 15_000);
    assert_eq!(settings.logging.format, "text");
    assert!(settings.amadeus.credentials().is_none());
    assert!(settings.amadeus_error.is_none());
}

#[test]
fn test_credentials_require_both_values() {
    let key_only = Settings::from_lookup(&FLIGHT_SEARCH_MANIFEST, lookup(&[("AMADEUS_API_KEY", "key")]));
    assert!(key_only.amadeus.credentials().is_none());

    let blank_secret = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_API_KEY", "key"), ("AMADEUS_API_SECRET", "   ")]),
    );
    assert!(blank_secret.amadeus.credentials().is_none());

    let both = Settings::from_lookup(
        &HOTEL_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_API_KEY", "key"), ("AMADEUS_API_SECRET", "secret")]),
    );
    let credentials = both.amadeus.credentials().unwrap();
    assert_eq!(credentials.api_key, "key");
    assert_eq!(credentials.api_secret, "secret");
}

#[test]
fn test_debug_output_hides_secret() {
    let settings = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_API_KEY", "key"), ("AMADEUS_API_SECRET", "super-secret-value")]),
    );

    assert!(!format!("{:?}", settings).contains("super-secret-value"));
}

#[test]
fn test_undeclared_host_blocks_live_path_only() {
    let settings = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_BASE_URL", "https://evil.example.com")]),
    );

    assert!(settings.warnings.is_empty());
    assert!(settings.ensure_live_ready().is_err());
}

#[test]
fn test_invalid_timeouts_block_live_path_only() {
    let unparsable = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_SEARCH_TIMEOUT_MS", "15s")]),
    );
    let message = unparsable.ensure_live_ready().unwrap_err().to_string();
    assert!(message.contains("AMADEUS_SEARCH_TIMEOUT_MS"));
    assert_eq!(unparsable.logging.format, "text");

    let zero = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_AUTH_TIMEOUT_MS", "0")]),
    );
    assert!(zero.ensure_live_ready().is_err());

    let custom = Settings::from_lookup(
        &FLIGHT_SEARCH_MANIFEST,
        lookup(&[("AMADEUS_AUTH_TIMEOUT_MS", "2500")]),
    );
    assert!(custom.ensure_live_ready().is_ok());
    assert_eq!(custom.amadeus.auth_timeout_ms, 2_500);
}

#[test]
fn test_invalid_log_format_falls_back_with_warning() {
    let settings = Settings::from_lookup(&HOTEL_SEARCH_MANIFEST, lookup(&[("LOG_FORMAT", "xml")]));

    assert_eq!(settings.logging.format, "text");
    assert_eq!(settings.warnings.len(), 1);
    assert!(settings.warnings[0].contains("xml"));
    assert!(settings.ensure_live_ready().is_ok());
}

#[test]
fn test_manifests_declare_amadeus_egress() {
    for manifest in [&*FLIGHT_SEARCH_MANIFEST, &*HOTEL_SEARCH_MANIFEST] {
        manifest.validate().unwrap();
        assert_eq!(manifest.allowed_domains(), vec!["api.amadeus.com"]);
        assert!(manifest.requires_user_confirmation);
        assert!(manifest.has_destination_allowlist);
        assert!(manifest.env_vars.required.is_empty());
        assert!(manifest
            .env_vars
            .optional
            .contains(&"AMADEUS_API_KEY".to_string()));
    }

    assert_eq!(FLIGHT_SEARCH_MANIFEST.name, "flight-search");
    assert_eq!(HOTEL_SEARCH_MANIFEST.name, "hotel-search");
}
