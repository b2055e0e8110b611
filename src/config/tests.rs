//! Configuration tests
//!
//! Round-trip guards: whatever `to_toml()` writes must parse back into the
//! same effective configuration. When you add a field, extend
//! `test_config_roundtrip_preserves_values` so a forgotten serializer fails here.

use super::*;
use std::collections::HashMap;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str)
        .unwrap_or_else(|e| panic!("config should parse.\nTOML:\n{}\nError: {}", toml_str, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the default template can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let config = Config::from_sources(parse(&toml_str), no_env);

    assert_eq!(config.content, None);
    assert_eq!(config.storage_path, None);
    assert_eq!(config.navigation, NavigationConfig::default());
    assert_eq!(config.tracker, TrackerConfig::default());
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.content = Some(PathBuf::from("/home/me/portfolio.toml"));
    config.storage_path = Some(PathBuf::from("/tmp/prefs \"quoted\".toml"));
    config.navigation.scroll_duration_ms = 650;
    config.navigation.frame_rate = 30;
    config.tracker.band_top = 0.25;
    config.tracker.band_bottom = 0.5;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("C:\\logs\\folio");
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "portfolio".to_string();

    let parsed = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(parsed.content, config.content);
    assert_eq!(parsed.storage_path, config.storage_path);
    assert_eq!(parsed.navigation, config.navigation);
    assert_eq!(parsed.tracker, config.tracker);
    assert_eq!(parsed.logging.level, "debug");
    assert!(parsed.logging.file_enabled);
    assert_eq!(parsed.logging.file_dir, config.logging.file_dir);
    assert_eq!(parsed.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(parsed.logging.file_prefix, "portfolio");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
content = "/from/file.toml"
[navigation]
scroll_duration_ms = 400
"#,
    );
    let env = env_from(&[
        ("FOLIO_CONTENT", "/from/env.toml"),
        ("FOLIO_SCROLL_DURATION_MS", "250"),
        ("FOLIO_STORAGE", "/env/prefs.toml"),
    ]);
    let config = Config::from_sources(file, env);

    assert_eq!(config.content, Some(PathBuf::from("/from/env.toml")));
    assert_eq!(config.storage_path, Some(PathBuf::from("/env/prefs.toml")));
    assert_eq!(config.navigation.scroll_duration_ms, 250);
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
[navigation]
scroll_duration_ms = 400

[tracker]
band_top = 0.1
"#,
    );
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.navigation.scroll_duration_ms, 400);
    assert_eq!(config.navigation.frame_rate, 60);
    assert_eq!(config.tracker.band_top, 0.1);
    assert_eq!(config.tracker.band_bottom, 0.6);
}

#[test]
fn test_empty_tracker_band_falls_back_to_defaults() {
    let file = parse("[tracker]\nband_top = 0.5\nband_bottom = 0.5\n");
    let config = Config::from_sources(file, no_env);

    // Values are kept as written; only the band the tracker gets is replaced
    assert_eq!(config.tracker.band_top, 0.5);
    let band = config.tracker.band();
    assert_eq!(band, crate::tracker::VisibilityBand::default());

    let viewport = crate::tracker::Viewport::new(0, 50);
    assert!(band.intersects(crate::tracker::Region::new(15, 5), viewport));
}

#[test]
fn test_usable_tracker_band_is_kept() {
    let file = parse("[tracker]\nband_top = 0.4\nband_bottom = 0.4\n");
    let band = Config::from_sources(file, no_env).tracker.band();
    assert_eq!(band.top_margin, 0.4);
    assert_eq!(band.bottom_margin, 0.4);
}

#[test]
fn test_unparseable_env_duration_falls_through() {
    let env = env_from(&[("FOLIO_SCROLL_DURATION_MS", "fast")]);
    let config = Config::from_sources(FileConfig::default(), env);
    assert_eq!(config.navigation.scroll_duration_ms, 1000);
}

#[test]
fn test_empty_paths_mean_unset() {
    let env = env_from(&[("FOLIO_CONTENT", "  ")]);
    let config = Config::from_sources(FileConfig::default(), env);
    assert_eq!(config.content, None);
}

#[test]
fn test_zero_frame_rate_uses_default() {
    let file = parse("[navigation]\nframe_rate = 0\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.navigation.frame_rate, 60);
    assert!(config.navigation.frame_interval() > std::time::Duration::ZERO);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("HOURLY"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let file = Config::read_file_config(&dir.path().join("config.toml")).unwrap();
    assert!(file.content.is_none());
    assert!(file.navigation.is_none());
}

#[test]
fn test_broken_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigation\nscroll_duration_ms = ").unwrap();

    let err = Config::read_file_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
