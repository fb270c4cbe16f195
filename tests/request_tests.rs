//! Request parsing tests

use serde_json::json;
use travel_skills::models::SkillInput;
use travel_skills::services::parser::{parse_flight_query, parse_hotel_query, parse_input};

fn invalid_message(result: travel_skills::SkillResult<impl std::fmt::Debug>) -> String {
    let err = result.expect_err("expected INVALID_PARAMS");
    assert_eq!(err.code(), "INVALID_PARAMS");
    err.to_string()
}

#[test]
fn test_flight_defaults_applied() {
    let input = parse_input(r#"{"origin": "JFK", "destination": "LHR", "date": "2025-06-01"}"#).unwrap();
    let query = parse_flight_query(&input).unwrap();

    assert_eq!(query.origin, "JFK");
    assert_eq!(query.passengers, 1);
    assert_eq!(query.cabin, "ECONOMY");
    assert_eq!(query.max_results, 10);
}

#[test]
fn test_flight_overrides_and_config() {
    let input = SkillInput::from_value(json!({
        "params": {
            "origin": "SFO",
            "destination": "NRT",
            "date": "2025-09-10",
            "passengers": 3,
            "cabin": "BUSINESS"
        },
        "config": {"max_results": 4}
    }));
    let query = parse_flight_query(&input).unwrap();

    assert_eq!(query.passengers, 3);
    assert_eq!(query.cabin, "BUSINESS");
    assert_eq!(query.max_results, 4);
}

#[test]
fn test_flight_missing_fields_listed_in_order() {
    let input = parse_input(r#"{"params": {"destination": "LHR"}}"#).unwrap();

    assert_eq!(
        invalid_message(parse_flight_query(&input)),
        "Required: origin, destination, date; missing: origin, date"
    );
}

#[test]
fn test_empty_strings_count_as_missing() {
    let input = parse_input(r#"{"city_code": "", "check_in": "  ", "check_out": "2025-06-04"}"#).unwrap();

    assert_eq!(
        invalid_message(parse_hotel_query(&input)),
        "Required: city_code, check_in, check_out; missing: city_code, check_in"
    );
}

#[test]
fn test_null_counts_as_missing() {
    let input = parse_input(r#"{"origin": null, "destination": "LHR", "date": "2025-06-01"}"#).unwrap();

    assert!(invalid_message(parse_flight_query(&input)).ends_with("missing: origin"));
}

#[test]
fn test_empty_stdin_reports_every_field() {
    let input = parse_input("").unwrap();

    assert_eq!(
        invalid_message(parse_hotel_query(&input)),
        "Required: city_code, check_in, check_out; missing: city_code, check_in, check_out"
    );
}

#[test]
fn test_malformed_json_is_invalid_params() {
    let message = invalid_message(parse_input("{not json"));

    assert!(message.starts_with("Input is not valid JSON"));
}

#[test]
fn test_wrong_typed_field_is_invalid_params() {
    let input = parse_input(r#"{"origin": "JFK", "destination": "LHR", "date": "2025-06-01", "passengers": "two"}"#)
        .unwrap();

    assert!(invalid_message(parse_flight_query(&input)).starts_with("Invalid params"));
}

#[test]
fn test_hotel_guests_default() {
    let input = parse_input(r#"{"city_code": "PAR", "check_in": "2025-06-01", "check_out": "2025-06-04"}"#).unwrap();
    let query = parse_hotel_query(&input).unwrap();

    assert_eq!(query.city_code, "PAR");
    assert_eq!(query.guests, 1);
}
