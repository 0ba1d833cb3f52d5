//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod geometry;
mod helpers;
mod motion;
mod style;


use crate::schema::IcosaConfig;
use icosa_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &IcosaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    geometry::validate_geometry(&mut errors, config);
    geometry::validate_camera(&mut errors, config);
    motion::validate_motion(&mut errors, config);
    style::validate_style(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
