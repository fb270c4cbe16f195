//! Flight search provider
//!
//! One GET against the Amadeus flight offers endpoint

use super::SearchProvider;
use crate::config::{SkillManifest, FLIGHT_SEARCH_MANIFEST};
use crate::models::amadeus::DataEnvelope;
use crate::models::{FlightQuery, FlightResult, SkillInput};
use crate::services::{mock, normalizer, parser, AccessToken, AmadeusClient};
use crate::utils::error::SkillResult;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Flight offers search endpoint
pub const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";

/// Flight search strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightSearch;

impl FlightSearch {
    /// Query string for the offers endpoint
    pub fn query_params(query: &FlightQuery) -> Vec<(&'static str, String)> {
        vec![
            ("originLocationCode", query.origin.clone()),
            ("destinationLocationCode", query.destination.clone()),
            ("departureDate", query.date.clone()),
            ("adults", query.passengers.to_string()),
            ("travelClass", query.cabin.clone()),
            ("max", query.max_results.to_string()),
            ("currencyCode", "USD".to_string()),
        ]
    }
}

#[async_trait]
impl SearchProvider for FlightSearch {
    type Query = FlightQuery;
    type Item = FlightResult;

    fn manifest(&self) -> &SkillManifest {
        &FLIGHT_SEARCH_MANIFEST
    }

    fn parse_query(&self, input: &SkillInput) -> SkillResult<FlightQuery> {
        parser::parse_flight_query(input)
    }

    async fn search(
        &self,
        client: &AmadeusClient,
        token: &AccessToken,
        query: &FlightQuery,
    ) -> SkillResult<Vec<Value>> {
        let params = Self::query_params(query);
        let envelope: DataEnvelope = client.get_json(FLIGHT_OFFERS_PATH, token, &params).await?;

        debug!("Flight search returned {} offers", envelope.data.len());
        Ok(envelope.data)
    }

    fn normalize(&self, raw: &Value) -> FlightResult {
        normalizer::normalize_flight_offer(raw)
    }

    fn mock_results(&self, query: &FlightQuery) -> Vec<FlightResult> {
        mock::mock_flight_results(query)
    }
}
