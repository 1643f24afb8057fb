//! CLI definitions for farescan
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command surface can be inspected without pulling in the
//! command implementations.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "farescan")]
#[command(about = "[ farescan ] - score ride-hailing trip offers against your hourly-rate target")]
#[command(
    long_about = "farescan - analyze ride-hailing offer screens.

Takes the text captured from an Uber or DiDi driver app offer screen
(OCR output or an accessibility-tree dump), extracts fare, distance,
time and rating, and scores the offer against your desired hourly rate.

QUICK START:
    farescan analyze offer.txt         Analyze one captured snapshot
    cat offer.txt | farescan analyze   Same, from stdin
    farescan watch                     Analyze a snapshot stream
    farescan config show               Show current settings

Set RUST_LOG=farescan=debug to trace the extraction decisions."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one snapshot of captured screen text
    #[command(long_about = "Analyze one snapshot of captured screen text.

Reads the snapshot from FILE, or from stdin when no file is given, and
prints the extracted trip with its profitability verdict. Prints
'no trip detected' when the text does not contain a valid offer.

EXAMPLES:
    farescan analyze offer.txt
    farescan analyze offer.txt --json
    farescan analyze --platform com.ubercab.driver offer.txt
    farescan analyze --rate 12000 offer.txt")]
    Analyze {
        /// Snapshot file (stdin when omitted)
        file: Option<String>,
        /// Source app package identifier, when known
        #[arg(long, default_value = "")]
        platform: String,
        /// Override the configured desired hourly rate
        #[arg(long)]
        rate: Option<f64>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
        /// Skip extraction and echo the raw text (testing aid)
        #[arg(long)]
        raw: bool,
    },

    /// Analyze a stream of snapshots from stdin
    #[command(long_about = "Analyze a stream of snapshots from stdin.

Snapshots are separated by lines containing only '---'. Each accepted
snapshot prints one verdict line; snapshots arriving faster than the
configured debounce interval are dropped.

EXAMPLE:
    capture-tool | farescan watch --json")]
    Watch {
        /// Source app package identifier, when known
        #[arg(long, default_value = "")]
        platform: String,
        /// Override the configured desired hourly rate
        #[arg(long)]
        rate: Option<f64>,
        /// Print records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Update persisted settings
    Set {
        /// Desired hourly rate in fare currency units
        #[arg(long)]
        hourly_rate: Option<f64>,
        /// Minimum driver rating (stored, not yet enforced)
        #[arg(long)]
        min_rating: Option<f64>,
    },
}
