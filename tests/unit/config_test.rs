//! Unit tests for configuration parsing and defaults.

use farescan::config::{AnalysisConfig, Config, DebounceConfig};

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.analysis.desired_hourly_rate, 10000.0);
    assert_eq!(config.analysis.min_rating, None);
    assert!(!config.analysis.show_raw_text);
    assert_eq!(config.debounce.ocr_interval_ms, 900);
    assert_eq!(config.debounce.event_interval_ms, 200);
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.analysis.desired_hourly_rate, 10000.0);
    assert_eq!(config.debounce.ocr_interval_ms, 900);
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let config: Config = toml::from_str(
        r#"
        [analysis]
        desired_hourly_rate = 9000.0
        min_rating = 4.7

        [debounce]
        event_interval_ms = 350
        "#,
    )
    .unwrap();
    assert_eq!(config.analysis.desired_hourly_rate, 9000.0);
    assert_eq!(config.analysis.min_rating, Some(4.7));
    assert_eq!(config.debounce.event_interval_ms, 350);
    // Unset field keeps its default.
    assert_eq!(config.debounce.ocr_interval_ms, 900);
}

#[test]
fn sub_configs_default_independently() {
    assert_eq!(AnalysisConfig::default().desired_hourly_rate, 10000.0);
    assert_eq!(DebounceConfig::default().event_interval_ms, 200);
}

#[test]
fn serialized_config_parses_back() {
    let mut config = Config::default();
    config.analysis.show_raw_text = true;
    config.debounce.ocr_interval_ms = 1200;

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert!(parsed.analysis.show_raw_text);
    assert_eq!(parsed.debounce.ocr_interval_ms, 1200);
}
