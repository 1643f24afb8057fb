//! Trip-field extraction and profitability classification.
//!
//! This module is the analytical core: it turns noisy OCR or
//! accessibility-tree text from a ride app's offer screen into a
//! structured [`TripRecord`] and decides whether the offer clears the
//! driver's configured hourly-rate target.
//!
//! # Design
//!
//! - **Pure core**: extraction, normalization and classification are
//!   synchronous, CPU-bound functions with no I/O, safe to call from any
//!   thread. The only mutable state is the pipeline's debounce timestamps
//!   and its last-record cache.
//! - **Patterns as data**: the near-duplicate regex variants per field
//!   live in an ordered strategy table tried in priority order, not in
//!   branching code.
//! - **No fatal errors**: every input yields an [`Outcome`], never an
//!   error across the pipeline boundary.
//!
//! # Module structure
//!
//! - [`numeral`] - locale-ambiguous number normalization
//! - [`patterns`] - compiled-once regex registry and keyword tables
//! - [`trip`] - the trip record model and change detection
//! - [`extractor`] - primary and alternative field extraction
//! - [`classifier`] - the profitability gates
//! - [`debounce`] - rate limiting for the snapshot stream
//! - [`frame`] - blocked-capture detection on raw frames
//! - [`pipeline`] - orchestration and the OCR seam

pub mod classifier;
pub mod debounce;
pub mod extractor;
pub mod frame;
pub mod numeral;
pub mod patterns;
pub mod pipeline;
pub mod trip;

pub use debounce::Debouncer;
pub use frame::Frame;
pub use pipeline::{AnalysisPipeline, Outcome, SkipReason, TextRecognizer, TripChange};
pub use trip::{Platform, TripRecord};
