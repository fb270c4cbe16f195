//! Normalization performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use travel_skills::handlers::render_output;
use travel_skills::models::{Metadata, SkillResponse};
use travel_skills::services::normalizer::{normalize_flight_offer, normalize_hotel_offer};
use travel_skills::utils::duration::parse_duration_minutes;

/// Create a flight offer with the given number of segments
fn create_flight_offer(segments: usize) -> Value {
    let segments: Vec<Value> = (0..segments)
        .map(|i| {
            json!({
                "departure": {"iataCode": format!("A{:02}", i), "at": "2025-06-01T08:00:00"},
                "arrival": {"iataCode": format!("A{:02}", i + 1), "at": "2025-06-01T11:15:00"},
                "carrierCode": "BA"
            })
        })
        .collect();

    json!({
        "itineraries": [{"duration": "PT14H45M", "segments": segments}],
        "price": {"currency": "USD", "total": "1204.10", "grandTotal": "1250.75"}
    })
}

fn create_hotel_offer() -> Value {
    json!({
        "hotel": {"hotelId": "HLPAR266", "name": "HOTEL PARIS CENTRE", "rating": "4"},
        "offers": [{
            "checkInDate": "2025-06-01",
            "checkOutDate": "2025-06-04",
            "room": {"typeEstimated": {"category": "DELUXE_ROOM"}},
            "price": {"currency": "EUR", "base": "180.00", "total": "612.45"}
        }]
    })
}

/// Benchmark: Flight offers by segment count
fn bench_flight_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_flight_offer");

    for segments in [1usize, 2, 4].iter() {
        let offer = create_flight_offer(*segments);
        group.bench_with_input(BenchmarkId::new("segments", segments), segments, |b, _| {
            b.iter(|| black_box(normalize_flight_offer(black_box(&offer))))
        });
    }

    group.finish();
}

/// Benchmark: Hotel offer normalization
fn bench_hotel_normalization(c: &mut Criterion) {
    let offer = create_hotel_offer();

    c.bench_function("normalize_hotel_offer", |b| {
        b.iter(|| black_box(normalize_hotel_offer(black_box(&offer))))
    });
}

/// Benchmark: ISO-8601 duration parsing
fn bench_duration_parsing(c: &mut Criterion) {
    c.bench_function("parse_duration_minutes", |b| {
        b.iter(|| black_box(parse_duration_minutes(black_box("PT10H30M"))))
    });
}

/// Benchmark: Framing a full page of results
fn bench_render_output(c: &mut Criterion) {
    let results: Vec<_> = (0..10)
        .map(|i| normalize_flight_offer(&create_flight_offer(1 + i % 3)))
        .collect();
    let response = SkillResponse::success(
        "flight-search",
        "0.1.0",
        results,
        Metadata {
            query_time_ms: 120,
            source_api: "api.amadeus.com".to_string(),
            cached: false,
        },
    );

    c.bench_function("render_output", |b| {
        b.iter(|| black_box(render_output(black_box(&response))))
    });
}

criterion_group!(
    benches,
    bench_flight_normalization,
    bench_hotel_normalization,
    bench_duration_parsing,
    bench_render_output
);

criterion_main!(benches);
