//! farescan library
//!
//! Extracts fare, distance, time and rating from ride-hailing offer
//! screen text and classifies trip profitability against a configured
//! hourly-rate target.

pub mod analysis;
pub mod cli;
pub mod config;

pub use analysis::{AnalysisPipeline, Frame, Outcome, Platform, TripChange, TripRecord};
pub use config::Config;
