//! Fixed-distance perspective projection onto the drawing surface.

use icosa_common::PixelSize;

use crate::geometry::Point3;

/// Default virtual camera distance in object-space units.
pub const CAMERA_DISTANCE: f64 = 1000.0;

/// Surface dimensions and their center, as used for projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
        }
    }

    pub fn from_size(size: PixelSize) -> Self {
        Self::new(size.width as f64, size.height as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A projected point in surface pixels plus its perspective scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Project `p` with the camera `camera_distance` units in front of the
/// origin. Smaller `z` is closer to the camera and gets a larger scale.
///
/// The caller keeps `camera_distance` above the object's circumradius, so
/// the denominator never reaches zero.
pub fn project(p: Point3, viewport: &Viewport, camera_distance: f64) -> Projected {
    let scale = camera_distance / (camera_distance + p.z);
    Projected {
        x: viewport.center_x + p.x * scale,
        y: viewport.center_y + p.y * scale,
        scale,
    }
}
