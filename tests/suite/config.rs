//! Config files feeding the app.

use std::fs;
use std::time::Duration;

use finder_engine::{ConfigError, FinderConfig, LoadingTimings};
use tempfile::tempdir;

#[test]
fn loading_section_overrides_only_given_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[loading]\nsettle_delay_ms = 250\n").unwrap();

    let config = FinderConfig::load_from(&path).unwrap();
    let timings = FinderConfig::loading_timings(config.as_ref());

    assert_eq!(timings.stage_interval, LoadingTimings::default().stage_interval);
    assert_eq!(timings.settle_delay, Duration::from_millis(250));
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[loading\nstage_interval_ms = ").unwrap();

    let err = FinderConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn no_config_means_defaults() {
    let timings = FinderConfig::loading_timings(None);
    assert_eq!(timings.time_to_results(), Duration::from_millis(8500));
}
