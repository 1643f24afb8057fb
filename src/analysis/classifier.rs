//! Trip profitability classification.

use tracing::debug;

use super::trip::TripRecord;

/// Offers below this total fare are never worth accepting.
pub const MIN_TOTAL_PRICE: f64 = 300.0;

/// Offers paying less than this per km are never worth accepting.
pub const MIN_PRICE_PER_KM: f64 = 50.0;

/// Fill in the derived rates and the profitability verdict.
///
/// Two independent gates must both pass:
/// - rate gate: minutes are known and the per-minute rate meets the
///   per-minute equivalent of `desired_hourly_rate`
/// - floor gate: the fare clears [`MIN_TOTAL_PRICE`] and the per-km rate
///   clears [`MIN_PRICE_PER_KM`]
///
/// Pure and total: records with `price <= 0` or `distance <= 0` come back
/// unprofitable with zeroed rates, nothing divides by zero, and
/// reclassifying an already-classified record is a no-op.
///
/// A configured minimum rating is accepted by the pipeline but not
/// enforced here; see the config docs.
pub fn classify(mut record: TripRecord, desired_hourly_rate: f64) -> TripRecord {
    if record.price <= 0.0 || record.distance <= 0.0 {
        record.price_per_km = 0.0;
        record.price_per_minute = 0.0;
        record.price_per_hour = 0.0;
        record.is_profitable = false;
        return record;
    }

    record.price_per_km = record.price / record.distance;
    record.price_per_minute = if record.estimated_minutes > 0 {
        record.price / record.estimated_minutes as f64
    } else {
        0.0
    };
    record.price_per_hour = record.price_per_minute * 60.0;

    let required_per_minute = desired_hourly_rate / 60.0;
    let rate_gate =
        record.estimated_minutes > 0 && record.price_per_minute >= required_per_minute;
    let floor_gate = record.price >= MIN_TOTAL_PRICE && record.price_per_km >= MIN_PRICE_PER_KM;

    record.is_profitable = rate_gate && floor_gate;

    debug!(
        price_per_km = record.price_per_km,
        price_per_minute = record.price_per_minute,
        required_per_minute,
        rate_gate,
        floor_gate,
        profitable = record.is_profitable,
        "classified"
    );
    record
}
