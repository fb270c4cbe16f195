//! Request parsing service
//!
//! Turns the raw stdin document into validated search queries. Missing or
//! empty required fields stop the pipeline before any network activity.

use crate::models::request::{FlightParams, HotelParams};
use crate::models::{FlightQuery, HotelQuery, SkillInput};
use crate::utils::error::{helpers, SkillError, SkillResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Required flight fields, in message order
pub const FLIGHT_REQUIRED: [&str; 3] = ["origin", "destination", "date"];

/// Required hotel fields, in message order
pub const HOTEL_REQUIRED: [&str; 3] = ["city_code", "check_in", "check_out"];

/// Parse raw stdin text into a skill input
///
/// Empty or whitespace-only input is an empty object.
pub fn parse_input(raw: &str) -> SkillResult<SkillInput> {
    if raw.trim().is_empty() {
        return Ok(SkillInput::default());
    }

    let document: Value = serde_json::from_str(raw)
        .map_err(|e| SkillError::InvalidParams(format!("Input is not valid JSON: {}", e)))?;

    Ok(SkillInput::from_value(document))
}

/// Validate flight search parameters
pub fn parse_flight_query(input: &SkillInput) -> SkillResult<FlightQuery> {
    let params: FlightParams = decode_params(input)?;

    let (origin, destination, date) = match (
        present(&params.origin),
        present(&params.destination),
        present(&params.date),
    ) {
        (Some(origin), Some(destination), Some(date)) => (origin, destination, date),
        (origin, destination, date) => {
            return Err(missing(&FLIGHT_REQUIRED, [origin, destination, date]));
        }
    };

    let query = FlightQuery {
        origin: origin.to_string(),
        destination: destination.to_string(),
        date: date.to_string(),
        passengers: params.passengers,
        cabin: params.cabin,
        max_results: input.config.max_results,
    };

    debug!(
        "Flight query {} -> {} on {} ({} pax, {})",
        query.origin, query.destination, query.date, query.passengers, query.cabin
    );
    Ok(query)
}

/// Validate hotel search parameters
pub fn parse_hotel_query(input: &SkillInput) -> SkillResult<HotelQuery> {
    let params: HotelParams = decode_params(input)?;

    let (city_code, check_in, check_out) = match (
        present(&params.city_code),
        present(&params.check_in),
        present(&params.check_out),
    ) {
        (Some(city_code), Some(check_in), Some(check_out)) => (city_code, check_in, check_out),
        (city_code, check_in, check_out) => {
            return Err(missing(&HOTEL_REQUIRED, [city_code, check_in, check_out]));
        }
    };

    let query = HotelQuery {
        city_code: city_code.to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        guests: params.guests,
    };

    debug!(
        "Hotel query {} from {} to {} ({} guests)",
        query.city_code, query.check_in, query.check_out, query.guests
    );
    Ok(query)
}

fn decode_params<T: DeserializeOwned>(input: &SkillInput) -> SkillResult<T> {
    serde_json::from_value(Value::Object(input.params.clone()))
        .map_err(|e| SkillError::InvalidParams(format!("Invalid params: {}", e)))
}

/// A field counts as present when it is non-empty after trimming
fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn missing(required: &[&str], found: [Option<&str>; 3]) -> SkillError {
    let missing: Vec<&str> = required
        .iter()
        .zip(found.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    helpers::missing_params(required, &missing)
}
