//! Wireframe drawing style.

use serde::{Deserialize, Serialize};

/// Colors and sizes used to draw the wireframe.
///
/// Colors accept `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub edge_color: String,
    /// Stroke width in pixels (valid range: 0.1-10.0).
    pub edge_width: f64,
    pub vertex_color: String,
    /// Dot radius in pixels at projection scale 1.0 (valid range: 0.0-50.0).
    pub vertex_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#000000".into(),
            edge_color: "rgba(255,255,255,0.12)".into(),
            edge_width: 1.0,
            vertex_color: "#ffffff".into(),
            vertex_radius: 2.5,
        }
    }
}
