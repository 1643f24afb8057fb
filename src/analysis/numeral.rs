//! Locale-ambiguous numeral normalization.
//!
//! OCR output from the ride apps mixes Argentine and US number formats:
//! `13.525` and `13,525` are both thirteen-thousand-something, while
//! `$11.06` is eleven pesos and change. Which separator is the decimal
//! point can only be decided from the shape of the string itself.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-only strings shaped like thousands grouping (`13.525`, `1.234.567`).
static DOT_GROUPING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{3})+$").unwrap());

/// Normalize a raw numeric string into a non-negative value.
///
/// Separator rules, in order:
/// - both `.` and `,` present: whichever appears last is the decimal
///   point, the other is a thousands separator and is dropped
/// - only `,` present: decimal comma when at most two digits follow the
///   last comma, thousands separator otherwise
/// - only `.` present: kept as-is unless the string matches a thousands
///   grouping shape, in which case the dots are dropped
///
/// With `bare_integer` set the string is parsed directly after whitespace
/// removal. Uber's dynamic-fare form (`ARS4518`) ships the amount without
/// any separators, and running the separator rules over it would be wrong
/// for amounts like `4.518` that it never produces.
///
/// Returns `None` when the string does not normalize to a finite,
/// non-negative value. Callers treat that the same as a pattern miss.
pub fn normalize(raw: &str, bare_integer: bool) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if bare_integer {
        return parse_non_negative(&stripped);
    }

    // Drop currency glyphs and codes, keep digits and separators.
    let digits: String = stripped
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if digits.is_empty() {
        return None;
    }

    let has_dot = digits.contains('.');
    let has_comma = digits.contains(',');

    let canonical = if has_dot && has_comma {
        if digits.rfind('.') > digits.rfind(',') {
            digits.replace(',', "")
        } else {
            decimalize_last(&digits.replace('.', ""), ',')
        }
    } else if has_comma {
        match digits.rfind(',') {
            Some(last) if digits.len() - last - 1 <= 2 => decimalize_last(&digits, ','),
            _ => digits.replace(',', ""),
        }
    } else if has_dot && DOT_GROUPING.is_match(&digits) {
        digits.replace('.', "")
    } else {
        digits
    };

    parse_non_negative(&canonical)
}

/// Replace the last occurrence of `sep` with a decimal point and drop the rest.
fn decimalize_last(s: &str, sep: char) -> String {
    let last = match s.rfind(sep) {
        Some(idx) => idx,
        None => return s.to_string(),
    };
    s.char_indices()
        .filter_map(|(i, c)| {
            if c == sep {
                (i == last).then_some('.')
            } else {
                Some(c)
            }
        })
        .collect()
}

fn parse_non_negative(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
