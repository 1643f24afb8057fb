//! Unit tests for field extraction over realistic offer-screen text.

use farescan::analysis::extractor::{extract, extract_alternative};
use farescan::Platform;

#[test]
fn uber_offer_with_pickup_and_trip_legs() {
    let text = "ARS15,200\nA 12 min (5,2 km)\nViaje: 28 min (12,3 km)\n4.85 (312)\nUberX";
    let record = extract(text, "");

    assert_eq!(record.platform, Platform::Uber);
    assert!((record.price - 15200.0).abs() < 0.01);
    assert_eq!(record.currency, "ARS");
    assert!((record.distance - 17.5).abs() < 0.01);
    assert_eq!(record.estimated_minutes, 40);
    assert_eq!(record.rating, Some(4.85));
    assert_eq!(record.rating_count, Some(312));
}

#[test]
fn leg_summation_uses_dot_decimals_too() {
    let text = "uber ARS9,000\nA 12 min (5.2 km)\nViaje: 28 min (12.3 km)";
    let record = extract(text, "");
    assert!((record.distance - 17.5).abs() < 0.01);
    assert_eq!(record.estimated_minutes, 40);
}

#[test]
fn didi_offer_detected_by_keywords() {
    let record = extract("DiDi Express\n$3.500\n4,0 km\n12 min", "");
    assert_eq!(record.platform, Platform::DiDi);
    assert!((record.price - 3500.0).abs() < 0.01);
    assert_eq!(record.currency, "$");
}

#[test]
fn unknown_platform_invalidates_record() {
    let record = extract("ARS9,000\n5.0 km\n20 min", "");
    assert_eq!(record.platform, Platform::Unknown);
    assert!(!record.is_valid());
}

#[test]
fn package_hint_resolves_platform_without_keywords() {
    let record = extract("ARS9,000\n5.0 km\n20 min", "com.didiglobal.driver");
    assert_eq!(record.platform, Platform::DiDi);
    assert!(record.is_valid());
}

#[test]
fn surcharge_marked_candidate_never_wins() {
    // The marked 9435 is larger than the real fare and must still lose.
    let record = extract("uber\n+ARS 9435\nARS8,200\n5.0 km\n20 min", "");
    assert!((record.price - 8200.0).abs() < 0.01);
}

#[test]
fn trailing_plus_marks_surcharge_too() {
    let record = extract("uber\n9435 ARS+\nARS8,200\n5.0 km\n20 min", "");
    assert!((record.price - 8200.0).abs() < 0.01);
}

#[test]
fn small_numbers_below_floor_are_ignored() {
    // 4.85 and 95 are currency-taggable but below the plausibility floor.
    let record = extract("uber $4.85 $95\n5.0 km\n20 min", "");
    assert_eq!(record.price, 0.0);
}

#[test]
fn price_selection_is_maximum_of_all_strategies() {
    let record = extract("uber ARS4518 13.525 ARS $2.200\n5.0 km", "");
    assert!((record.price - 13525.0).abs() < 0.01);
}

#[test]
fn generic_distance_takes_largest() {
    let record = extract("uber ARS8,000\n0.4 km to pickup, 11.2 km total\n25 min", "");
    assert!((record.distance - 11.2).abs() < 0.01);
}

#[test]
fn incomplete_text_leaves_zero_fields() {
    let record = extract("uber comfort", "");
    assert_eq!(record.price, 0.0);
    assert_eq!(record.distance, 0.0);
    assert_eq!(record.estimated_minutes, 0);
    assert_eq!(record.rating, None);
    assert!(!record.is_valid());
}

#[test]
fn alternative_pass_handles_compact_formats() {
    let record = extract_alternative("uber ARS4518 (9min) (2.9km)", "");
    assert!(record.is_valid());
    assert!((record.price - 4518.0).abs() < 0.01);
    assert!((record.distance - 2.9).abs() < 0.01);
    assert_eq!(record.estimated_minutes, 9);
}

#[test]
fn alternative_pass_handles_didi_decimal_fare() {
    let record = extract_alternative("didi taxi $3.129,10\n2,9 kms\n15 min", "");
    assert!(record.is_valid());
    assert!((record.price - 3129.10).abs() < 0.01);
}
