//! Field extraction from raw screen text.
//!
//! Converts one OCR or accessibility-tree snapshot into a [`TripRecord`].
//! Extraction never fails: a pattern that finds nothing simply leaves its
//! field at the zero/None default, and the validity invariant downstream
//! decides whether the record is usable.

use tracing::debug;

use super::numeral;
use super::patterns::{
    ALT_DISTANCE, ALT_FARE, ALT_RATING, ALT_TIME, DIDI_KEYWORDS, GENERIC_DISTANCE, GENERIC_TIME,
    PICKUP_LEG, PRICE_BARE, PRICE_PREFIXED, PRICE_SUFFIXED, RATING_COUNTED, RATING_TRIPS,
    TRIP_LEG, UBER_KEYWORDS,
};
use super::trip::{Platform, TripRecord};

/// Fares below this are OCR strays (ratings, counts, street numbers).
pub const MIN_PLAUSIBLE_PRICE: f64 = 100.0;

/// Fares above this are OCR garbage, not a ride offer.
pub const MAX_PLAUSIBLE_PRICE: f64 = 100_000.0;

struct PriceCandidate {
    value: f64,
    currency: String,
}

/// One named price-extraction strategy; strategies run in priority order
/// and every candidate they produce competes for the maximum.
struct PriceStrategy {
    name: &'static str,
    find: fn(&str) -> Vec<PriceCandidate>,
}

const PRICE_STRATEGIES: &[PriceStrategy] = &[
    PriceStrategy {
        name: "currency-prefixed",
        find: find_prefixed_prices,
    },
    PriceStrategy {
        name: "currency-suffixed",
        find: find_suffixed_prices,
    },
    PriceStrategy {
        name: "bare-dynamic-fare",
        find: find_bare_prices,
    },
];

/// Extract a trip record from one snapshot of screen text.
///
/// `platform_hint` is the source app's package identifier when known
/// (accessibility path) or empty (OCR path).
pub fn extract(text: &str, platform_hint: &str) -> TripRecord {
    let lower = text.to_lowercase();
    let mut record = TripRecord {
        platform: detect_platform(&lower, platform_hint),
        ..Default::default()
    };

    extract_price(text, &mut record);
    extract_distance_and_time(text, &mut record);
    extract_rating(text, &mut record);

    debug!(
        platform = %record.platform,
        price = record.price,
        distance = record.distance,
        minutes = record.estimated_minutes,
        "primary extraction done"
    );
    record
}

/// Last-resort extraction with the loose pattern set.
///
/// Invoked once by the pipeline when the primary pass produced an invalid
/// record. The loose fare patterns skip the plausibility floor, so this
/// pass can pick up small dynamic fares the primary pass rejects.
pub fn extract_alternative(text: &str, platform_hint: &str) -> TripRecord {
    let lower = text.to_lowercase();
    let mut record = TripRecord {
        platform: detect_platform(&lower, platform_hint),
        ..Default::default()
    };

    if let Some(caps) = ALT_FARE.captures(text) {
        let value = if let Some(bare) = caps.get(1) {
            numeral::normalize(bare.as_str(), true)
        } else {
            caps.get(2)
                .and_then(|amount| numeral::normalize(amount.as_str(), false))
        };
        record.price = value.unwrap_or(0.0);
    }

    // First distance occurrence, largest minutes value: the loose minute
    // pattern also hits the pickup ETA, and the longer figure is the trip.
    if let Some(caps) = ALT_DISTANCE.captures(text) {
        record.distance = numeral::normalize(&caps[1], false).unwrap_or(0.0);
    }
    let mut max_minutes = 0u32;
    for caps in ALT_TIME.captures_iter(text) {
        if let Some(minutes) = numeral::normalize(&caps[1], false) {
            max_minutes = max_minutes.max(minutes.round() as u32);
        }
    }
    record.estimated_minutes = max_minutes;

    for caps in ALT_RATING.captures_iter(text) {
        let Some(rating) = numeral::normalize(&caps[1], false) else {
            continue;
        };
        if (0.0..=5.0).contains(&rating) {
            record.rating = Some(rating);
            record.rating_count = caps.get(2).and_then(|c| c.as_str().parse().ok());
            break;
        }
    }

    debug!(
        platform = %record.platform,
        price = record.price,
        distance = record.distance,
        minutes = record.estimated_minutes,
        "alternative extraction done"
    );
    record
}

/// Resolve the platform: package hint first, then keyword sniffing.
pub fn detect_platform(lower_text: &str, platform_hint: &str) -> Platform {
    if let Some(platform) = Platform::from_package(platform_hint) {
        return platform;
    }
    if UBER_KEYWORDS.iter().any(|k| lower_text.contains(k)) {
        Platform::Uber
    } else if DIDI_KEYWORDS.iter().any(|k| lower_text.contains(k)) {
        Platform::DiDi
    } else {
        Platform::Unknown
    }
}

/// Pick the fare out of every currency-tagged number on screen.
///
/// The fare is reliably the largest plausible candidate: offer screens
/// also show ratings, counts and street numbers that the patterns can
/// catch. Surcharge amounts are marked with an adjacent `+` and are never
/// the base fare.
fn extract_price(text: &str, record: &mut TripRecord) {
    let mut best: Option<PriceCandidate> = None;

    for strategy in PRICE_STRATEGIES {
        for candidate in (strategy.find)(text) {
            if candidate.value <= MIN_PLAUSIBLE_PRICE || candidate.value > MAX_PLAUSIBLE_PRICE {
                continue;
            }
            if best.as_ref().map_or(true, |b| candidate.value > b.value) {
                debug!(
                    strategy = strategy.name,
                    value = candidate.value,
                    currency = %candidate.currency,
                    "price candidate selected"
                );
                best = Some(candidate);
            }
        }
    }

    if let Some(best) = best {
        record.price = best.value;
        record.currency = best.currency;
    }
}

fn find_prefixed_prices(text: &str) -> Vec<PriceCandidate> {
    PRICE_PREFIXED
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if surcharge_adjacent(text, whole.start(), whole.end()) {
                return None;
            }
            Some(PriceCandidate {
                value: numeral::normalize(caps.get(2)?.as_str(), false)?,
                currency: caps.get(1)?.as_str().to_string(),
            })
        })
        .collect()
}

fn find_suffixed_prices(text: &str) -> Vec<PriceCandidate> {
    PRICE_SUFFIXED
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if surcharge_adjacent(text, whole.start(), whole.end()) {
                return None;
            }
            Some(PriceCandidate {
                value: numeral::normalize(caps.get(1)?.as_str(), false)?,
                currency: caps.get(2)?.as_str().to_string(),
            })
        })
        .collect()
}

fn find_bare_prices(text: &str) -> Vec<PriceCandidate> {
    PRICE_BARE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if surcharge_adjacent(text, whole.start(), whole.end()) {
                return None;
            }
            Some(PriceCandidate {
                value: numeral::normalize(caps.get(1)?.as_str(), true)?,
                currency: "ARS".to_string(),
            })
        })
        .collect()
}

/// A literal `+` glued to the match marks a surcharge or tip, not a fare.
fn surcharge_adjacent(text: &str, start: usize, end: usize) -> bool {
    text[..start].chars().next_back() == Some('+') || text[end..].chars().next() == Some('+')
}

/// Two-tier distance/time extraction.
///
/// Tier A sums every pickup leg (`A 12 min (5,2 km)`) and trip leg
/// (`Viaje: 28 min (12,3 km)`) found. Tier B kicks in per field when a
/// tier-A total stayed at zero: largest bare distance token, largest bare
/// minutes token. One rule, applied the same on every path.
fn extract_distance_and_time(text: &str, record: &mut TripRecord) {
    let mut total_distance = 0.0;
    let mut total_minutes = 0u32;

    for leg in [&PICKUP_LEG, &TRIP_LEG] {
        for caps in leg.captures_iter(text) {
            let minutes: u32 = caps[1].parse().unwrap_or(0);
            let distance = numeral::normalize(&caps[2], false).unwrap_or(0.0);
            total_minutes += minutes;
            total_distance += distance;
            debug!(minutes, distance, matched = &caps[0], "leg matched");
        }
    }

    if total_distance == 0.0 {
        for caps in GENERIC_DISTANCE.captures_iter(text) {
            if let Some(distance) = numeral::normalize(&caps[1], false) {
                if distance > total_distance {
                    total_distance = distance;
                }
            }
        }
    }

    if total_minutes == 0 {
        for caps in GENERIC_TIME.captures_iter(text) {
            if let Ok(minutes) = caps[1].parse::<u32>() {
                total_minutes = total_minutes.max(minutes);
            }
        }
    }

    record.distance = total_distance;
    record.estimated_minutes = total_minutes;
    // The generic pattern accepts `mi` but the unit is always reported as
    // km and no conversion happens.
    record.distance_unit = "km".to_string();
}

/// First in-range rating match wins; anything outside [0, 5] is a number
/// the rating pattern caught by accident.
fn extract_rating(text: &str, record: &mut TripRecord) {
    for pattern in [&RATING_COUNTED, &RATING_TRIPS] {
        for caps in pattern.captures_iter(text) {
            let Some(rating) = numeral::normalize(&caps[1], false) else {
                continue;
            };
            if (0.0..=5.0).contains(&rating) {
                record.rating = Some(rating);
                record.rating_count = caps[2].parse().ok();
                return;
            }
        }
    }
}
