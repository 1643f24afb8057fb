//! Analysis pipeline orchestration.
//!
//! One snapshot in, one outcome out: debounce gate, blocked-capture
//! short-circuit, extraction, validity check, one alternative-pattern
//! retry, classification, change detection. Every failure mode is
//! absorbed into an outcome value; nothing propagates as an error across
//! the pipeline boundary.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use super::classifier;
use super::debounce::Debouncer;
use super::extractor;
use super::frame::{Frame, BLOCKED_RATIO};
use super::trip::TripRecord;
use crate::config::AnalysisConfig;

/// Seam to the external text-recognition engine. The pipeline treats it
/// as a black box and absorbs its failures.
pub trait TextRecognizer {
    fn recognize(&self, frame: &Frame) -> Result<String, RecognizerError>;
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("text recognition failed: {0}")]
    Failed(String),
    #[error("recognizer received an empty frame")]
    EmptyFrame,
}

/// Why an analysis attempt was dropped before extraction ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The debounce gate suppressed this attempt.
    Debounced,
    /// The frame looks like a blocked screen capture.
    BlockedCapture,
}

/// Whether a detected trip replaces the previous one or refreshes it.
///
/// The overlay animates on a new offer and quietly redraws on a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripChange {
    New,
    Refreshed,
}

/// Outcome of one analysis cycle.
#[derive(Debug)]
pub enum Outcome {
    /// A valid, classified trip offer.
    Trip {
        record: TripRecord,
        change: TripChange,
    },
    /// Raw-text bypass for the testing flag: extraction skipped entirely.
    RawText(String),
    /// Nothing extractable on screen.
    NoTrip,
    /// Nothing extractable, and a previously reported trip is gone. The
    /// overlay uses this to start its auto-hide timer.
    TripLost,
    /// Attempt dropped before extraction.
    Skipped(SkipReason),
}

/// Orchestrates extraction and classification over a snapshot stream.
///
/// Holds the two debounce gates (text events fire far more often than OCR
/// rounds are worth) and the last valid record for change detection.
/// Single-writer by construction: one snapshot is processed to completion
/// before the next is accepted.
pub struct AnalysisPipeline {
    text_gate: Debouncer,
    ocr_gate: Debouncer,
    last_trip: Option<TripRecord>,
}

impl AnalysisPipeline {
    pub fn new(text_interval: Duration, ocr_interval: Duration) -> Self {
        Self {
            text_gate: Debouncer::new(text_interval),
            ocr_gate: Debouncer::new(ocr_interval),
            last_trip: None,
        }
    }

    /// Analyze one text snapshot from the accessibility collector.
    pub fn analyze_text(
        &mut self,
        text: &str,
        platform_hint: &str,
        config: &AnalysisConfig,
        now: Instant,
    ) -> Outcome {
        if !self.text_gate.should_run(now) {
            return Outcome::Skipped(SkipReason::Debounced);
        }
        self.run_extraction(text, platform_hint, config)
    }

    /// Analyze one captured frame, going through the OCR seam.
    ///
    /// Gated by the slower OCR debouncer instead of the text gate, and
    /// short-circuits on blocked captures before spending an OCR round.
    pub fn analyze_frame(
        &mut self,
        frame: &Frame,
        platform_hint: &str,
        recognizer: &dyn TextRecognizer,
        config: &AnalysisConfig,
        now: Instant,
    ) -> Outcome {
        if !self.ocr_gate.should_run(now) {
            return Outcome::Skipped(SkipReason::Debounced);
        }
        if frame.is_mostly_black(BLOCKED_RATIO) {
            debug!(
                ratio = frame.darkness_ratio(),
                "frame looks blocked, skipping OCR"
            );
            return Outcome::Skipped(SkipReason::BlockedCapture);
        }

        let text = match recognizer.recognize(frame) {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "text recognition failed");
                return self.no_trip();
            }
        };
        self.run_extraction(&text, platform_hint, config)
    }

    /// The last valid record reported, if any.
    pub fn last_trip(&self) -> Option<&TripRecord> {
        self.last_trip.as_ref()
    }

    fn run_extraction(
        &mut self,
        text: &str,
        platform_hint: &str,
        config: &AnalysisConfig,
    ) -> Outcome {
        if config.show_raw_text {
            return Outcome::RawText(text.to_string());
        }
        if text.trim().is_empty() {
            return self.no_trip();
        }

        let mut record = extractor::extract(text, platform_hint);
        if !record.is_valid() {
            debug!("primary extraction invalid, trying alternative patterns");
            record = extractor::extract_alternative(text, platform_hint);
        }
        if !record.is_valid() {
            return self.no_trip();
        }

        let record = classifier::classify(record, config.desired_hourly_rate);
        let change = match &self.last_trip {
            Some(previous) if !record.differs_significantly(previous) => TripChange::Refreshed,
            _ => TripChange::New,
        };
        self.last_trip = Some(record.clone());
        Outcome::Trip { record, change }
    }

    fn no_trip(&mut self) -> Outcome {
        if self.last_trip.take().is_some() {
            Outcome::TripLost
        } else {
            Outcome::NoTrip
        }
    }
}
