//! The trip record data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ride app produced the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    Uber,
    DiDi,
    #[default]
    Unknown,
}

impl Platform {
    /// Resolve a platform from an app package identifier.
    ///
    /// The accessibility path hands us the source package directly, which
    /// is more reliable than keyword sniffing on the screen text.
    pub fn from_package(package: &str) -> Option<Self> {
        if package.starts_with("com.ubercab") {
            Some(Platform::Uber)
        } else if package.starts_with("com.didiglobal") || package.starts_with("com.didi.") {
            Some(Platform::DiDi)
        } else {
            None
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Platform::Unknown)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Uber => write!(f, "Uber"),
            Platform::DiDi => write!(f, "DiDi"),
            Platform::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Change thresholds for telling a fresh offer apart from a re-render of
/// the one already on screen.
pub const NEW_TRIP_PRICE_DELTA: f64 = 100.0;
pub const NEW_TRIP_DISTANCE_DELTA: f64 = 1.0;
pub const NEW_TRIP_MINUTES_DELTA: u32 = 5;

/// A structured trip offer extracted from one screen snapshot.
///
/// Extraction fills the raw fields; the derived rates and the
/// profitability verdict are set by the classifier afterwards. A record
/// that fails [`TripRecord::is_valid`] never reaches the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub platform: Platform,
    /// Total fare in `currency` units.
    pub price: f64,
    pub currency: String,
    /// Pickup plus trip distance. Always reported in km: a `mi` token is
    /// accepted by the generic pattern but no conversion is performed.
    pub distance: f64,
    pub distance_unit: String,
    /// Pickup plus trip minutes.
    pub estimated_minutes: u32,
    /// Driver rating in [0, 5], when the screen shows one.
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub price_per_km: f64,
    pub price_per_minute: f64,
    pub price_per_hour: f64,
    pub is_profitable: bool,
    pub detected_at: DateTime<Utc>,
}

impl Default for TripRecord {
    fn default() -> Self {
        Self {
            platform: Platform::Unknown,
            price: 0.0,
            currency: "ARS".to_string(),
            distance: 0.0,
            distance_unit: "km".to_string(),
            estimated_minutes: 0,
            rating: None,
            rating_count: None,
            price_per_km: 0.0,
            price_per_minute: 0.0,
            price_per_hour: 0.0,
            is_profitable: false,
            detected_at: Utc::now(),
        }
    }
}

impl TripRecord {
    /// Whether the essential fields were extracted.
    ///
    /// Invalid records are dropped by the pipeline and never classified.
    pub fn is_valid(&self) -> bool {
        self.platform.is_known() && self.price > 0.0 && self.distance > 0.0
    }

    /// Whether this record describes a different offer than `previous`.
    ///
    /// Small wobbles in the extracted numbers come from OCR noise and
    /// re-renders of the same screen; only a real jump in price, distance
    /// or time means a new offer replaced the old one.
    pub fn differs_significantly(&self, previous: &TripRecord) -> bool {
        let price_changed = (self.price - previous.price).abs() > NEW_TRIP_PRICE_DELTA;
        let distance_changed =
            (self.distance - previous.distance).abs() > NEW_TRIP_DISTANCE_DELTA;
        let time_changed = self.estimated_minutes.abs_diff(previous.estimated_minutes)
            > NEW_TRIP_MINUTES_DELTA;
        price_changed || distance_changed || time_changed
    }
}

impl fmt::Display for TripRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {:.2} | {:.1} {} | {} min",
            self.platform,
            self.currency,
            self.price,
            self.distance,
            self.distance_unit,
            self.estimated_minutes
        )?;
        if let Some(rating) = self.rating {
            write!(f, " | rating {:.2}", rating)?;
            if let Some(count) = self.rating_count {
                write!(f, " ({})", count)?;
            }
        }
        write!(
            f,
            " | {:.2}/km {:.2}/min | {}",
            self.price_per_km,
            self.price_per_minute,
            if self.is_profitable {
                "PROFITABLE"
            } else {
                "not profitable"
            }
        )
    }
}
