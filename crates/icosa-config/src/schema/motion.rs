//! Rotation motion configuration.

use serde::{Deserialize, Serialize};

/// How the rotation follows the pointer and drifts on its own.
///
/// All rates are per frame, not per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the remaining distance to the target covered each
    /// frame (valid range: (0.0, 1.0]).
    pub smoothing: f64,
    /// Autonomous pitch increment in radians per frame.
    pub drift_x: f64,
    /// Autonomous yaw increment in radians per frame.
    pub drift_y: f64,
    /// Maximum pointer-driven swing in radians at the viewport edge
    /// (valid range: 0.0-π).
    pub pointer_gain: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            drift_x: 0.001,
            drift_y: 0.003,
            pointer_gain: 0.5,
        }
    }
}
