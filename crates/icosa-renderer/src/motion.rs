//! Rotation state, pointer targeting, and vertex rotation.
//!
//! Everything here is a pure function of its inputs so a scene's motion
//! can be stepped and checked without a surface.

use crate::geometry::Point3;
use crate::projection::Viewport;

/// Cumulative rotation in radians. Unbounded; trig wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
}

/// Rotation the scene eases toward, derived from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetRotation {
    pub x: f64,
    pub y: f64,
}

/// Per-frame motion constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Fraction of the remaining gap to the target closed per frame.
    pub smoothing: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    /// Target swing at the viewport edge, in radians.
    pub pointer_gain: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            drift_x: 0.001,
            drift_y: 0.003,
            pointer_gain: 0.5,
        }
    }
}

pub fn lerp(start: f64, end: f64, amt: f64) -> f64 {
    (1.0 - amt) * start + amt * end
}

/// Map a pointer position in surface pixels to a target rotation.
///
/// Horizontal position drives yaw over `[-gain, gain]`; vertical position
/// drives pitch over `[-gain/2, gain/2]` with up positive. Returns `None`
/// for a zero-area viewport.
pub fn target_from_pointer(
    px: f64,
    py: f64,
    viewport: &Viewport,
    pointer_gain: f64,
) -> Option<TargetRotation> {
    if viewport.is_empty() {
        return None;
    }
    let nx = (px / viewport.width) * 2.0 - 1.0;
    let ny = 0.5 - py / viewport.height;
    Some(TargetRotation {
        x: ny * pointer_gain,
        y: nx * pointer_gain,
    })
}

/// Ease `current` toward `target` by `smoothing`, without drift.
pub fn ease_toward(current: RotationState, target: TargetRotation, smoothing: f64) -> RotationState {
    RotationState {
        x: lerp(current.x, target.x, smoothing),
        y: lerp(current.y, target.y, smoothing),
    }
}

/// One frame of motion: ease toward the target, then apply drift.
///
/// The step is per call, not per elapsed second, so the apparent speed
/// follows the display refresh rate.
pub fn advance_rotation(
    current: RotationState,
    target: TargetRotation,
    params: &MotionParams,
) -> RotationState {
    let eased = ease_toward(current, target, params.smoothing);
    RotationState {
        x: eased.x + params.drift_x,
        y: eased.y + params.drift_y,
    }
}

/// Rotate about X by `rotation.x`, then about Y by `rotation.y`.
///
/// The two rotations do not commute; the order is fixed.
pub fn rotate_vertex(p: Point3, rotation: RotationState) -> Point3 {
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let y = p.y * cos_x - p.z * sin_x;
    let z = p.y * sin_x + p.z * cos_x;

    let (sin_y, cos_y) = rotation.y.sin_cos();
    let z2 = z * cos_y - p.x * sin_y;
    let x2 = z * sin_y + p.x * cos_y;

    Point3::new(x2, y, z2)
}

// =============================================================================
// Tests
// =============================================================================
