//! Mock results
//!
//! Deterministic fixtures served when no upstream credentials are set.
//! Always three entries, same schema as live results.

use crate::models::{FlightQuery, FlightResult, HotelPrice, HotelQuery, HotelResult, Price};

/// Provider label on mock results
pub const MOCK_PROVIDER_NAME: &str = "Amadeus (mock)";

struct MockFlight {
    airline: &'static str,
    amount: f64,
    departs: &'static str,
    arrives: &'static str,
    stops: u32,
    duration_minutes: u32,
}

const MOCK_FLIGHTS: [MockFlight; 3] = [
    MockFlight {
        airline: "AA",
        amount: 847.00,
        departs: "08:30:00",
        arrives: "14:45:00",
        stops: 0,
        duration_minutes: 375,
    },
    MockFlight {
        airline: "UA",
        amount: 723.50,
        departs: "11:15:00",
        arrives: "19:30:00",
        stops: 1,
        duration_minutes: 495,
    },
    MockFlight {
        airline: "DL",
        amount: 912.00,
        departs: "06:00:00",
        arrives: "11:20:00",
        stops: 0,
        duration_minutes: 320,
    },
];

struct MockHotel {
    name_prefix: &'static str,
    hotel_id: &'static str,
    rating: &'static str,
    amount: f64,
    per_night: f64,
    room_type: &'static str,
}

const MOCK_HOTELS: [MockHotel; 3] = [
    MockHotel {
        name_prefix: "Grand Hotel",
        hotel_id: "MOCK001",
        rating: "5",
        amount: 450.00,
        per_night: 150.00,
        room_type: "STANDARD",
    },
    MockHotel {
        name_prefix: "City Inn",
        hotel_id: "MOCK002",
        rating: "3",
        amount: 270.00,
        per_night: 90.00,
        room_type: "STANDARD",
    },
    MockHotel {
        name_prefix: "Boutique Suites",
        hotel_id: "MOCK003",
        rating: "4",
        amount: 360.00,
        per_night: 120.00,
        room_type: "SUITE",
    },
];

/// Mock flight offers on the requested date
pub fn mock_flight_results(query: &FlightQuery) -> Vec<FlightResult> {
    MOCK_FLIGHTS
        .iter()
        .map(|flight| FlightResult {
            provider: MOCK_PROVIDER_NAME.to_string(),
            airline: flight.airline.to_string(),
            price: Price {
                amount: flight.amount,
                currency: "USD".to_string(),
            },
            departure: format!("{}T{}", query.date, flight.departs),
            arrival: format!("{}T{}", query.date, flight.arrives),
            stops: flight.stops,
            duration_minutes: flight.duration_minutes,
        })
        .collect()
}

/// Mock hotel offers in the requested city
pub fn mock_hotel_results(query: &HotelQuery) -> Vec<HotelResult> {
    MOCK_HOTELS
        .iter()
        .map(|hotel| HotelResult {
            provider: MOCK_PROVIDER_NAME.to_string(),
            name: format!("{} {}", hotel.name_prefix, query.city_code),
            hotel_id: hotel.hotel_id.to_string(),
            rating: hotel.rating.to_string(),
            price: HotelPrice {
                amount: hotel.amount,
                currency: "USD".to_string(),
                per_night: hotel.per_night,
            },
            room_type: hotel.room_type.to_string(),
            check_in: query.check_in.clone(),
            check_out: query.check_out.clone(),
        })
        .collect()
}
