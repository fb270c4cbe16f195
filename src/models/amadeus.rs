//! Amadeus API data models
//!
//! Shapes of the upstream payloads we read. Every field is optional on the
//! wire and falls back to a default, and scalar fields accept either a JSON
//! string or a number since Amadeus is not consistent about which it sends.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// `{ "data": [...] }` envelope shared by the search endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataEnvelope {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub data: Vec<Value>,
}

/// Hotel list entry (reference-data endpoint)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hotel_id: String,
}

/// Flight offer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightOffer {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub itineraries: Vec<Itinerary>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: OfferPrice,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default, deserialize_with = "lenient")]
    pub departure: FlightEndpoint,
    #[serde(default, deserialize_with = "lenient")]
    pub arrival: FlightEndpoint,
    #[serde(default, deserialize_with = "lenient_string")]
    pub carrier_code: String,
}

/// Departure or arrival point of a segment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub at: String,
}

/// Price block shared by flight and hotel offers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub grand_total: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub base: f64,
}

/// Hotel entry returned by the offers endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelOffers {
    #[serde(default, deserialize_with = "lenient")]
    pub hotel: HotelInfo,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub offers: Vec<HotelOffer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub hotel_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub check_in_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub check_out_date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub price: OfferPrice,
    #[serde(default, deserialize_with = "lenient")]
    pub room: Room,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default, deserialize_with = "lenient")]
    pub type_estimated: TypeEstimated,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeEstimated {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
}

/// Deserialize a nested structure, defaulting it when the shape is wrong
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list, dropping it when it is not an array and defaulting
/// elements that do not fit
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Deserialize a string, rendering numbers and booleans as text
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Deserialize a decimal amount sent as `"123.45"` or `123.45`
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(if amount.is_finite() { amount } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amounts_from_strings_and_numbers() {
        let price: OfferPrice = serde_json::from_value(json!({
            "currency": "EUR",
            "grandTotal": "123.45",
            "total": 99,
            "base": "not a number"
        }))
        .unwrap();

        assert_eq!(price.currency, "EUR");
        assert_eq!(price.grand_total, 123.45);
        assert_eq!(price.total, 99.0);
        assert_eq!(price.base, 0.0);
    }

    #[test]
    fn test_wrong_shapes_default() {
        let offer: FlightOffer = serde_json::from_value(json!({
            "itineraries": "oops",
            "price": 12
        }))
        .unwrap();

        assert!(offer.itineraries.is_empty());
        assert_eq!(offer.price.grand_total, 0.0);
    }

    #[test]
    fn test_numeric_rating_as_text() {
        let hotel: HotelInfo = serde_json::from_value(json!({"rating": 4, "hotelId": "HX1"})).unwrap();
        assert_eq!(hotel.rating, "4");
        assert_eq!(hotel.hotel_id, "HX1");
    }

    #[test]
    fn test_null_data_is_empty() {
        let envelope: DataEnvelope = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(envelope.data.is_empty());

        let envelope: DataEnvelope = serde_json::from_value(json!({"meta": {}})).unwrap();
        assert!(envelope.data.is_empty());
    }
}
