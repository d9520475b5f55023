//! Configuration loading from disk.

use graphboard::{ConfigError, EditorConfig};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("editor.json");
    fs::write(
        &path,
        r#"{ "frame_interval_ms": 33, "snap_grid": 16.0, "native_context_menu_modifier": false }"#,
    )
    .unwrap();

    let config = EditorConfig::load(&path).unwrap();
    assert_eq!(config.frame_interval(), Duration::from_millis(33));
    assert_eq!(config.snap_grid, Some(16.0));
    assert!(!config.native_context_menu_modifier);
    assert_eq!(config.snap(7.0, 9.0), (0.0, 16.0));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = EditorConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("editor.json");
    fs::write(&path, "{ frame_interval_ms: ").unwrap();

    let err = EditorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_load_rejects_non_positive_grid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("editor.json");
    fs::write(&path, r#"{ "snap_grid": -4.0 }"#).unwrap();

    let err = EditorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("snap_grid"));
}

#[test]
fn test_disable_snap_through_override() {
    let config = EditorConfig {
        snap_grid: Some(8.0),
        ..Default::default()
    }
    .with_overrides(|var| (var == "GRAPHBOARD_SNAP_GRID").then(|| "off".to_string()))
    .unwrap();

    assert_eq!(config.snap_grid, None);
    assert_eq!(config.snap(3.3, 4.4), (3.3, 4.4));
}
