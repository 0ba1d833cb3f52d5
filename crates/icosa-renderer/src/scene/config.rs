//! Scene parameters resolved from the TOML config.

use icosa_common::ConfigError;
use icosa_config::schema::IcosaConfig;
use icosa_config::parse_color;

use crate::geometry::{DEFAULT_SIZE, EDGE_THRESHOLD};
use crate::motion::MotionParams;
use crate::projection::CAMERA_DISTANCE;

/// Drawing style with colors already parsed to normalized RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub edge_color: [f32; 4],
    pub edge_width: f32,
    pub vertex_color: [f32; 4],
    /// Dot radius at projection scale 1.0.
    pub vertex_radius: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            edge_color: [1.0, 1.0, 1.0, 0.12],
            edge_width: 1.0,
            vertex_color: [1.0, 1.0, 1.0, 1.0],
            vertex_radius: 2.5,
        }
    }
}

/// Everything a [`GeometryScene`](super::GeometryScene) needs besides its
/// surface and scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub size: f64,
    pub edge_threshold: f64,
    pub camera_distance: f64,
    pub motion: MotionParams,
    pub style: SceneStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            edge_threshold: EDGE_THRESHOLD,
            camera_distance: CAMERA_DISTANCE,
            motion: MotionParams::default(),
            style: SceneStyle::default(),
        }
    }
}

impl SceneConfig {
    /// Resolve from application config. Fails only on unparsable colors;
    /// range checks belong to `icosa_config::validation`.
    pub fn from_config(config: &IcosaConfig) -> Result<Self, ConfigError> {
        let style = &config.style;
        Ok(Self {
            size: config.geometry.size,
            edge_threshold: config.geometry.edge_threshold,
            camera_distance: config.camera.distance,
            motion: MotionParams {
                smoothing: config.motion.smoothing,
                drift_x: config.motion.drift_x,
                drift_y: config.motion.drift_y,
                pointer_gain: config.motion.pointer_gain,
            },
            style: SceneStyle {
                edge_color: parse_color(&style.edge_color)?.to_f32_array(),
                edge_width: style.edge_width as f32,
                vertex_color: parse_color(&style.vertex_color)?.to_f32_array(),
                vertex_radius: style.vertex_radius as f32,
            },
        })
    }
}
