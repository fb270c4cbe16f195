//! Response normalization service
//!
//! Maps raw Amadeus offers onto the canonical result records. Normalization
//! never fails; anything missing degrades to an empty string, zero or "USD".

use crate::models::amadeus::{FlightOffer, HotelOffers};
use crate::models::{FlightResult, HotelPrice, HotelResult, Price};
use crate::utils::duration::parse_duration_minutes;
use serde_json::Value;
use tracing::warn;

/// Provider label on live results
pub const PROVIDER_NAME: &str = "Amadeus";

/// Currency assumed when the upstream omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Normalize one raw flight offer
pub fn normalize_flight_offer(raw: &Value) -> FlightResult {
    let offer: FlightOffer = serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
        warn!("Flight offer did not match the expected shape: {}", e);
        FlightOffer::default()
    });

    let itinerary = offer.itineraries.into_iter().next().unwrap_or_default();
    let segments = &itinerary.segments;
    let first = segments.first();
    let last = segments.last();

    let duration = if itinerary.duration.is_empty() {
        "PT0M"
    } else {
        itinerary.duration.as_str()
    };

    FlightResult {
        provider: PROVIDER_NAME.to_string(),
        airline: first.map(|s| s.carrier_code.clone()).unwrap_or_default(),
        price: Price {
            amount: offer.price.grand_total,
            currency: currency_or_default(offer.price.currency),
        },
        departure: first.map(|s| s.departure.at.clone()).unwrap_or_default(),
        arrival: last.map(|s| s.arrival.at.clone()).unwrap_or_default(),
        stops: segments.len().saturating_sub(1) as u32,
        duration_minutes: parse_duration_minutes(duration),
    }
}

/// Normalize one raw hotel entry using its first offer
pub fn normalize_hotel_offer(raw: &Value) -> HotelResult {
    let entry: HotelOffers = serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
        warn!("Hotel offer did not match the expected shape: {}", e);
        HotelOffers::default()
    });

    let hotel = entry.hotel;
    let offer = entry.offers.into_iter().next().unwrap_or_default();

    HotelResult {
        provider: PROVIDER_NAME.to_string(),
        name: hotel.name,
        hotel_id: hotel.hotel_id,
        rating: hotel.rating,
        price: HotelPrice {
            amount: offer.price.total,
            currency: currency_or_default(offer.price.currency),
            per_night: offer.price.base,
        },
        room_type: offer.room.type_estimated.category,
        check_in: offer.check_in_date,
        check_out: offer.check_out_date,
    }
}

fn currency_or_default(currency: String) -> String {
    if currency.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        currency
    }
}
