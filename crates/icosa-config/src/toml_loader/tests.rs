//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_icosa_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, icosa_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[geometry]
size = 120.0

[style]
vertex_color = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.geometry.size - 120.0).abs() < f64::EPSILON);
    assert_eq!(config.style.vertex_color, "#ff0000");
    // Defaults preserved
    assert!((config.geometry.edge_threshold - 2.1).abs() < f64::EPSILON);
    assert_eq!(config.style.background, "#000000");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, icosa_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[motion]
smoothing = 4.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.motion.smoothing - 4.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icosa").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!((config.camera.distance - 1000.0).abs() < f64::EPSILON);
    assert_eq!(config.style.edge_color, "rgba(255,255,255,0.12)");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::IcosaConfig;

    let config: IcosaConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI sandbox has a config dir
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("icosa"));
        assert!(path_str.ends_with("config.toml"));
    }
}
