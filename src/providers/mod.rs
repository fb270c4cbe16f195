//! Provider module
//!
//! Defines the search strategy trait and its flight and hotel
//! implementations. The pipeline in `handlers::skill` is written once
//! against this trait.

pub mod flight;
pub mod hotel;

use crate::config::{Credentials, SkillManifest, AMADEUS_HOST};
use crate::models::SkillInput;
use crate::services::{AccessToken, AmadeusClient, AuthClient};
use crate::utils::error::SkillResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Search strategy for one resource type
///
/// Implementations supply request validation, the upstream search, result
/// normalization and mock fixtures. Authentication is shared.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Validated query
    type Query: Send + Sync;
    /// Normalized result record
    type Item: Serialize + DeserializeOwned + Send;

    /// Declared manifest of the skill
    fn manifest(&self) -> &SkillManifest;

    /// Hostname reported as `source_api` on live results
    fn source_api(&self) -> &str {
        AMADEUS_HOST
    }

    /// Extract and validate the query from the input document
    fn parse_query(&self, input: &SkillInput) -> SkillResult<Self::Query>;

    /// Obtain a bearer token
    async fn authenticate(
        &self,
        client: &AmadeusClient,
        credentials: &Credentials,
    ) -> SkillResult<AccessToken> {
        AuthClient::new(client).exchange(credentials).await
    }

    /// Fetch raw provider offers
    async fn search(
        &self,
        client: &AmadeusClient,
        token: &AccessToken,
        query: &Self::Query,
    ) -> SkillResult<Vec<Value>>;

    /// Map one raw offer onto a result record
    fn normalize(&self, raw: &Value) -> Self::Item;

    /// Deterministic results for the mock path
    fn mock_results(&self, query: &Self::Query) -> Vec<Self::Item>;
}

pub use flight::FlightSearch;
pub use hotel::HotelSearch;
