//! ISO-8601 duration parsing
//!
//! Amadeus encodes itinerary durations as `PT<h>H<m>M` with either part
//! optional. Days, seconds and fractions never appear.

/// Parse an ISO-8601 `PT..H..M` duration into total minutes
///
/// Absent markers contribute zero, as does any numeric part that fails to
/// parse.
pub fn parse_duration_minutes(iso_duration: &str) -> u32 {
    let mut remaining = iso_duration.trim();
    remaining = remaining.strip_prefix("PT").unwrap_or(remaining);

    let mut minutes = 0u32;

    if let Some((hours, rest)) = remaining.split_once('H') {
        minutes = minutes.saturating_add(parse_component(hours).saturating_mul(60));
        remaining = rest;
    }

    if let Some((mins, _)) = remaining.split_once('M') {
        minutes = minutes.saturating_add(parse_component(mins));
    }

    minutes
}

fn parse_component(digits: &str) -> u32 {
    digits.trim().parse().unwrap_or(0)
}
