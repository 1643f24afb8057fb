//! Compiled pattern registry for field extraction.
//!
//! All regexes are compiled once at first use and shared read-only after
//! that, so the extractor stays safe to call from any thread. The primary
//! patterns mirror what the Uber/DiDi offer screens actually render; the
//! `ALT_*` set is the looser last-resort variant tried only when the
//! primary pass fails the validity check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency code or glyph followed by an amount (`ARS13,525`, `$ 11.06`).
///
/// Runs over the original-case text: `ARS` as a currency code is only
/// trustworthy in uppercase, lowercase `ars` shows up inside words.
/// Amount and tag must sit on the same line; OCR emits one line per UI
/// element and cross-line pairings are coincidences.
pub static PRICE_PREFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(ARS|[$€£¥])[ \t]*([0-9][0-9.,]*)").unwrap());

/// Amount followed by a currency code or glyph (`13.525 ARS`).
pub static PRICE_SUFFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9][0-9.,]*)[ \t]*(ARS|[$€£¥])").unwrap());

/// Uber dynamic-fare form: currency code glued to bare digits, no
/// separators (`ARS4518`). Parsed in bare-integer mode.
pub static PRICE_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ARS([0-9]+)").unwrap());

/// Pickup leg: connector word, minutes, then the distance in parentheses
/// (`A 12 min (5,2 km)`). Both legs show up localized in Spanish or English.
pub static PICKUP_LEG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:A|To)\s+(\d{1,3})\s*min[^\n(]*\((\d+(?:[.,]\d+)?)\s*(?:km|mi)\)")
        .unwrap()
});

/// Trip leg: labeled with `Viaje:`/`Trip:` (`Viaje: 28 min (12,3 km)`).
pub static TRIP_LEG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:Viaje|Trip):\s*(\d{1,3})\s*min[^\n(]*\((\d+(?:[.,]\d+)?)\s*(?:km|mi)\)")
        .unwrap()
});

/// Any distance token. `mi` is accepted so US-formatted screens still
/// match, but no unit conversion happens downstream.
pub static GENERIC_DISTANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(km|mi)s?\b").unwrap());

/// Any minutes token.
pub static GENERIC_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,3})\s*min\b").unwrap());

/// Driver rating followed by a trip count in parentheses (`4.85 (312)`).
pub static RATING_COUNTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[.,]\d{1,2})\s*\((\d+)\)").unwrap());

/// Rating with a labeled trip count (`4.85 312 viajes`).
pub static RATING_TRIPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d[.,]\d{1,2})\s+(\d+)\s*(?:trips|viajes)\b").unwrap());

// Last-resort alternative patterns, tried only when the primary pass
// produced an invalid record.

/// Bare `ARS<digits>` or `$<amount>` fare.
pub static ALT_FARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ARS(\d+))|(?:\$\s*([0-9][0-9.,]*))").unwrap());

/// Distance with optional parentheses and plural unit (`(2.9km)`, `2,9 kms`).
pub static ALT_DISTANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(?\s*(\d+(?:[.,]\d+)?)\s*(?:km|kms)\s*\)?").unwrap());

/// Minutes with optional parentheses and short unit (`(9min)`, `9 m`).
pub static ALT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(?\s*(\d+(?:[.,]\d+)?)\s*(?:min|mins|m)\b\s*\)?").unwrap());

/// Rating with an optional count (`4,94 (524)` or just `4.94`).
pub static ALT_RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[.,]\d{1,2})\s*\(?\s*(\d{1,4})?\s*\)?").unwrap());

/// Keywords that identify an Uber offer screen (matched on lowercased text).
pub const UBER_KEYWORDS: &[&str] = &["uber", "uberx", "comfort", "black", "suv", "xl"];

/// Keywords that identify a DiDi offer screen.
pub const DIDI_KEYWORDS: &[&str] = &["didi", "express", "moto", "taxi", "premium"];
