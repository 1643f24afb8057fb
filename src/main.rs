//! farescan - CLI entry point

use std::fs;
use std::io::{self, BufRead, Read};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use farescan::cli::{Cli, Commands, ConfigCommands};
use farescan::{AnalysisPipeline, Config, Outcome, TripChange};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            file,
            platform,
            rate,
            json,
            raw,
        } => run_analyze(file, &platform, rate, json, raw),
        Commands::Watch {
            platform,
            rate,
            json,
        } => run_watch(&platform, rate, json),
        Commands::Config(command) => run_config(command),
    }
}

fn run_analyze(
    file: Option<String>,
    platform: &str,
    rate: Option<f64>,
    json: bool,
    raw: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            buf
        }
    };

    let config = load_analysis_config(rate, raw)?;
    let mut pipeline = new_pipeline();
    let outcome = pipeline.analyze_text(&text, platform, &config, Instant::now());
    print_outcome(&outcome, json);
    Ok(())
}

fn run_watch(platform: &str, rate: Option<f64>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let analysis = override_rate(config.analysis.clone(), rate);
    let mut pipeline = AnalysisPipeline::new(
        Duration::from_millis(config.debounce.event_interval_ms),
        Duration::from_millis(config.debounce.ocr_interval_ms),
    );

    let stdin = io::stdin();
    let mut snapshot = String::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read snapshot stream")?;
        if line.trim() == "---" {
            let outcome = pipeline.analyze_text(&snapshot, platform, &analysis, Instant::now());
            print_outcome(&outcome, json);
            snapshot.clear();
        } else {
            snapshot.push_str(&line);
            snapshot.push('\n');
        }
    }
    if !snapshot.trim().is_empty() {
        let outcome = pipeline.analyze_text(&snapshot, platform, &analysis, Instant::now());
        print_outcome(&outcome, json);
    }
    Ok(())
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Set {
            hourly_rate,
            min_rating,
        } => {
            let mut config = Config::load()?;
            if let Some(rate) = hourly_rate {
                config.analysis.desired_hourly_rate = rate;
            }
            if let Some(rating) = min_rating {
                config.analysis.min_rating = Some(rating);
            }
            config.save()?;
            println!("Configuration saved to {:?}", Config::config_path()?);
            Ok(())
        }
    }
}

fn load_analysis_config(rate: Option<f64>, raw: bool) -> Result<farescan::config::AnalysisConfig> {
    let config = Config::load()?;
    let mut analysis = override_rate(config.analysis, rate);
    if raw {
        analysis.show_raw_text = true;
    }
    Ok(analysis)
}

fn override_rate(
    mut analysis: farescan::config::AnalysisConfig,
    rate: Option<f64>,
) -> farescan::config::AnalysisConfig {
    if let Some(rate) = rate {
        analysis.desired_hourly_rate = rate;
    }
    analysis
}

fn new_pipeline() -> AnalysisPipeline {
    // One-shot commands never hit the debounce window; defaults are fine.
    let debounce = farescan::config::DebounceConfig::default();
    AnalysisPipeline::new(
        Duration::from_millis(debounce.event_interval_ms),
        Duration::from_millis(debounce.ocr_interval_ms),
    )
}

fn print_outcome(outcome: &Outcome, json: bool) {
    match outcome {
        Outcome::Trip { record, change } => {
            if json {
                match serde_json::to_string(record) {
                    Ok(line) => println!("{}", line),
                    Err(err) => eprintln!("Failed to serialize record: {}", err),
                }
            } else {
                let tag = match change {
                    TripChange::New => "new trip",
                    TripChange::Refreshed => "refreshed",
                };
                println!("[{}] {}", tag, record);
            }
        }
        Outcome::RawText(text) => println!("{}", text),
        Outcome::NoTrip => println!("no trip detected"),
        Outcome::TripLost => println!("trip no longer visible"),
        Outcome::Skipped(reason) => {
            println!("skipped ({:?})", reason);
        }
    }
}
