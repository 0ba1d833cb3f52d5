//! Geometry and camera configuration types.

use serde::{Deserialize, Serialize};

/// Icosahedron construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Object-space scale applied to the canonical vertex coordinates
    /// (valid range: 1.0-2000.0).
    pub size: f64,
    /// Edge distance cutoff as a multiple of `size`. Must sit strictly
    /// between the true edge length (2.0) and the shortest diagonal
    /// (2φ ≈ 3.236); valid range: 2.01-3.2.
    pub edge_threshold: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            size: 180.0,
            edge_threshold: 2.1,
        }
    }
}

/// Fixed perspective camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Virtual camera distance in object-space units
    /// (valid range: 100.0-100000.0, and larger than the circumradius).
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { distance: 1000.0 }
    }
}
