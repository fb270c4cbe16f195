//! Skill manifests
//!
//! Declarative security metadata read by the harness at load time. The
//! pipeline only consults it to keep its configured upstream inside the
//! declared egress list.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Hostname of the upstream travel API
pub const AMADEUS_HOST: &str = "api.amadeus.com";

/// Default base URL for the upstream travel API
pub const AMADEUS_BASE_URL: &str = "https://api.amadeus.com";

/// Risk level declared for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One allowed outbound domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EgressRule {
    pub domain: String,
    pub reason: String,
}

/// Environment variables a skill reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVars {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Skill manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillManifest {
    /// Skill name (kebab-case)
    pub name: String,
    /// Skill version (X.Y.Z)
    pub version: String,
    pub description: String,
    pub author: String,
    /// Capability codes (C-XXX)
    pub capabilities: Vec<String>,
    /// Allowed outbound domains
    pub egress: Vec<EgressRule>,
    /// Allowed filesystem paths
    pub allowed_paths: Vec<String>,
    pub env_vars: EnvVars,
    pub requires_user_confirmation: bool,
    pub has_destination_allowlist: bool,
    pub risk_level: RiskLevel,
}

impl SkillManifest {
    /// Domains the skill may contact
    pub fn allowed_domains(&self) -> Vec<&str> {
        self.egress.iter().map(|rule| rule.domain.as_str()).collect()
    }

    /// Whether a host is inside the declared egress list
    pub fn allows_host(&self, host: &str) -> bool {
        self.egress
            .iter()
            .any(|rule| rule.domain.eq_ignore_ascii_case(host))
    }

    /// Validate the manifest against the harness rules
    pub fn validate(&self) -> Result<()> {
        if !is_kebab_case(&self.name) {
            anyhow::bail!("\"name\" must be lowercase kebab-case, got \"{}\"", self.name);
        }

        if !is_semver(&self.version) {
            anyhow::bail!("\"version\" must be semver (X.Y.Z), got \"{}\"", self.version);
        }

        if self.description.is_empty() || self.author.is_empty() {
            anyhow::bail!("\"description\" and \"author\" must be non-empty");
        }

        for cap in &self.capabilities {
            if !is_capability_code(cap) {
                anyhow::bail!("Invalid capability code \"{}\"", cap);
            }
        }

        for rule in &self.egress {
            if rule.domain.is_empty() {
                anyhow::bail!("Egress rule missing domain");
            }
            if rule.domain.contains('*') {
                anyhow::bail!("Wildcard domains not allowed in egress: \"{}\"", rule.domain);
            }
            if rule.reason.is_empty() {
                anyhow::bail!("Egress rule for {} missing reason", rule.domain);
            }
        }

        Ok(())
    }
}

fn amadeus_manifest(name: &str, description: &str, capability: &str, reason: &str) -> SkillManifest {
    SkillManifest {
        name: name.to_string(),
        version: crate::SKILL_VERSION.to_string(),
        description: description.to_string(),
        author: "travel-skills".to_string(),
        capabilities: vec![capability.to_string()],
        egress: vec![EgressRule {
            domain: AMADEUS_HOST.to_string(),
            reason: reason.to_string(),
        }],
        allowed_paths: Vec::new(),
        env_vars: EnvVars {
            required: Vec::new(),
            optional: vec![
                "AMADEUS_API_KEY".to_string(),
                "AMADEUS_API_SECRET".to_string(),
            ],
        },
        requires_user_confirmation: true,
        has_destination_allowlist: true,
        risk_level: RiskLevel::Low,
    }
}

/// Manifest of the flight-search skill
pub static FLIGHT_SEARCH_MANIFEST: Lazy<SkillManifest> = Lazy::new(|| {
    amadeus_manifest(
        "flight-search",
        "Search flight offers via the Amadeus API",
        "C-FLIGHT-SEARCH",
        "Amadeus flight search API",
    )
});

/// Manifest of the hotel-search skill
pub static HOTEL_SEARCH_MANIFEST: Lazy<SkillManifest> = Lazy::new(|| {
    amadeus_manifest(
        "hotel-search",
        "Search hotel offers via the Amadeus API",
        "C-HOTEL-SEARCH",
        "Amadeus hotel search API",
    )
});

fn is_kebab_case(s: &str) -> bool {
    let starts_with_letter = s.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    starts_with_letter
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_semver(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn is_capability_code(s: &str) -> bool {
    match s.strip_prefix("C-") {
        Some(rest) => {
            rest.chars().next().is_some_and(|c| c.is_ascii_uppercase())
                && rest
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_manifests_are_valid() {
        assert!(FLIGHT_SEARCH_MANIFEST.validate().is_ok());
        assert!(HOTEL_SEARCH_MANIFEST.validate().is_ok());
    }

    #[test]
    fn test_security_declarations() {
        let manifest = &*HOTEL_SEARCH_MANIFEST;
        assert_eq!(manifest.allowed_domains(), vec!["api.amadeus.com"]);
        assert!(manifest.allowed_paths.is_empty());
        assert!(manifest.requires_user_confirmation);
        assert!(manifest.has_destination_allowlist);
        assert_eq!(manifest.capabilities, vec!["C-HOTEL-SEARCH".to_string()]);
    }

    #[test]
    fn test_allows_host() {
        assert!(FLIGHT_SEARCH_MANIFEST.allows_host("api.amadeus.com"));
        assert!(FLIGHT_SEARCH_MANIFEST.allows_host("API.AMADEUS.COM"));
        assert!(!FLIGHT_SEARCH_MANIFEST.allows_host("test.api.amadeus.com"));
    }

    #[test]
    fn test_rejects_wildcard_domain() {
        let mut manifest = FLIGHT_SEARCH_MANIFEST.clone();
        manifest.egress[0].domain = "*.amadeus.com".to_string();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_name_and_version() {
        let mut manifest = FLIGHT_SEARCH_MANIFEST.clone();
        manifest.name = "Flight_Search".to_string();
        assert!(manifest.validate().is_err());

        let mut manifest = FLIGHT_SEARCH_MANIFEST.clone();
        manifest.version = "1.0".to_string();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_serializes_risk_level_lowercase() {
        let json = serde_json::to_value(&*FLIGHT_SEARCH_MANIFEST).unwrap();
        assert_eq!(json["risk_level"], "low");
        assert_eq!(json["egress"][0]["domain"], "api.amadeus.com");
    }
}
