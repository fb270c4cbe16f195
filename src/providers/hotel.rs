//! Hotel search provider
//!
//! Two sequential lookups: hotel ids for the city, then offers for those
//! ids. An empty id list ends the search without the second call.

use super::SearchProvider;
use crate::config::{SkillManifest, HOTEL_SEARCH_MANIFEST};
use crate::models::amadeus::{DataEnvelope, HotelListEntry};
use crate::models::{HotelQuery, HotelResult, SkillInput};
use crate::services::{mock, normalizer, parser, AccessToken, AmadeusClient};
use crate::utils::error::SkillResult;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Hotel list by city endpoint
pub const HOTEL_LIST_PATH: &str = "/v1/reference-data/locations/hotels/by-city";

/// Hotel offers endpoint
pub const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";

/// Maximum number of hotel ids forwarded to the offers lookup
pub const MAX_HOTEL_IDS: usize = 10;

/// Hotel search strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct HotelSearch;

impl HotelSearch {
    /// Resolve up to ten hotel ids for a city
    pub async fn hotel_ids(
        &self,
        client: &AmadeusClient,
        token: &AccessToken,
        city_code: &str,
    ) -> SkillResult<Vec<String>> {
        let params = [("cityCode", city_code.to_string())];
        let envelope: DataEnvelope = client.get_json(HOTEL_LIST_PATH, token, &params).await?;

        Ok(hotel_ids_from(&envelope.data))
    }

    /// Fetch offers for the given hotel ids
    pub async fn hotel_offers(
        &self,
        client: &AmadeusClient,
        token: &AccessToken,
        hotel_ids: &[String],
        query: &HotelQuery,
    ) -> SkillResult<Vec<Value>> {
        let params = [
            ("hotelIds", hotel_ids.join(",")),
            ("checkInDate", query.check_in.clone()),
            ("checkOutDate", query.check_out.clone()),
            ("adults", query.guests.to_string()),
            ("currency", "USD".to_string()),
        ];
        let envelope: DataEnvelope = client.get_json(HOTEL_OFFERS_PATH, token, &params).await?;

        Ok(envelope.data)
    }
}

/// Pick the first ten non-empty hotel ids from a hotel list
fn hotel_ids_from(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<HotelListEntry>(entry.clone()).ok())
        .map(|entry| entry.hotel_id)
        .filter(|id| !id.is_empty())
        .take(MAX_HOTEL_IDS)
        .collect()
}

#[async_trait]
impl SearchProvider for HotelSearch {
    type Query = HotelQuery;
    type Item = HotelResult;

    fn manifest(&self) -> &SkillManifest {
        &HOTEL_SEARCH_MANIFEST
    }

    fn parse_query(&self, input: &SkillInput) -> SkillResult<HotelQuery> {
        parser::parse_hotel_query(input)
    }

    async fn search(
        &self,
        client: &AmadeusClient,
        token: &AccessToken,
        query: &HotelQuery,
    ) -> SkillResult<Vec<Value>> {
        let hotel_ids = self.hotel_ids(client, token, &query.city_code).await?;

        if hotel_ids.is_empty() {
            info!("No hotels listed for city {}, skipping offers lookup", query.city_code);
            return Ok(Vec::new());
        }

        debug!("Fetching offers for {} hotels", hotel_ids.len());
        self.hotel_offers(client, token, &hotel_ids, query).await
    }

    fn normalize(&self, raw: &Value) -> HotelResult {
        normalizer::normalize_hotel_offer(raw)
    }

    fn mock_results(&self, query: &HotelQuery) -> Vec<HotelResult> {
        mock::mock_hotel_results(query)
    }
}
