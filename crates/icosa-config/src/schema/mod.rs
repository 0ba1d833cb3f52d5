//! Configuration schema types for icosa.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock scene constants.

mod geometry;
mod motion;
mod style;
mod system;

pub use geometry::*;
pub use motion::*;
pub use style::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// The defaults reproduce the stock scene exactly. Only override what
/// you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct IcosaConfig {
    pub geometry: GeometryConfig,
    pub camera: CameraConfig,
    pub motion: MotionConfig,
    pub style: StyleConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
