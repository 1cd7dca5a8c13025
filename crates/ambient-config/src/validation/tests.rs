//! Tests for the full validation pipeline.

use super::*;
use crate::schema::AmbientConfig;

#[test]
fn default_config_validates() {
    assert!(validate(&AmbientConfig::default()).is_ok());
}

#[test]
fn catches_width_too_small() {
    let mut config = AmbientConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_height_too_large() {
    let mut config = AmbientConfig::default();
    config.window.height = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn catches_blank_title() {
    let mut config = AmbientConfig::default();
    config.window.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.title"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AmbientConfig::default();
    config.window.width = 0;
    config.window.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.height"));
    assert!(err.contains("; "));
}

#[test]
fn boundary_values_are_accepted() {
    let mut config = AmbientConfig::default();
    config.window.width = 320;
    config.window.height = 4320;
    assert!(validate(&config).is_ok());
}
