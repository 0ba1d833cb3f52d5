//! icosa configuration system.
//!
//! TOML-based configuration for the wireframe scene with validation.
//! Every section has defaults matching the stock scene, so an empty or
//! partial file works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use icosa_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use colors::{parse_color, validate_color};
pub use schema::{IcosaConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{save_config, save_config_to_path};

use icosa_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it strictly.
pub fn load_config() -> Result<IcosaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<IcosaConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &IcosaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
