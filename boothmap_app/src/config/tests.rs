// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for TOML config loading.

use std::path::Path;

use kurbo::Size;

use super::*;
use crate::error::ConfigError;

#[test]
fn empty_text_yields_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config, VenueConfig::default());
    assert_eq!(config.viewport.padding, 20.0);
    assert_eq!(config.pan.details_delay_ms, 350);
    assert_eq!(config.startup.measure_delay_ms, 100);
    assert_eq!(config.content.size(), Size::new(980.0, 680.0));
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = load_from_str(
        r#"
[viewport]
max_scale = 4.0

[pan]
duration_ms = 500
"#,
    )
    .unwrap();
    assert_eq!(config.viewport.max_scale, 4.0);
    assert_eq!(config.viewport.zoom_step, 1.5);
    assert_eq!(config.pan.duration_ms, 500);
    assert_eq!(config.pan.target_scale, 1.5);
}

#[test]
fn out_of_range_values_are_kept_by_the_loader() {
    let config = load_from_str("[viewport]\nzoom_step = 0.5\n").unwrap();
    assert_eq!(config.viewport.zoom_step, 0.5);
    assert!(config.validate().is_err());
}

#[test]
fn malformed_text_is_a_parse_error() {
    let err = load_from_str("this is not valid toml {{{").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = load_from_str("[viewport]\npadding = \"wide\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boothmap.toml");
    std::fs::write(&path, "[interaction]\nclick_tolerance = 8.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.interaction.click_tolerance, 8.0);

    let same = load_or_default(Some(&path)).unwrap();
    assert_eq!(same, config);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_from_path(Path::new("/nonexistent/boothmap.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(load_or_default(None).unwrap(), VenueConfig::default());
}

#[test]
fn viewport_config_mirrors_sections() {
    let mut config = VenueConfig::default();
    config.viewport.padding = 10.0;
    config.content.width = 500.0;
    let vc = config.viewport_config();
    assert_eq!(vc.fit.padding, 10.0);
    assert_eq!(vc.content_size, Size::new(500.0, 680.0));
    assert_eq!(vc.max_scale, 3.0);
    assert_eq!(vc.zoom_step, 1.5);
}
