//! Per-frame drawing: rotate, project, stroke edges, dot vertices.

use crate::geometry::Icosahedron;
use crate::motion::{rotate_vertex, RotationState};
use crate::projection::{project, Projected, Viewport};
use crate::surface::{Segment, StrokeStyle, Surface};

use super::config::{SceneConfig, SceneStyle};

/// Rotate and project every vertex, in vertex order.
pub fn project_mesh(
    mesh: &Icosahedron,
    rotation: RotationState,
    viewport: &Viewport,
    camera_distance: f64,
) -> Vec<Projected> {
    mesh.vertices()
        .iter()
        .map(|&v| project(rotate_vertex(v, rotation), viewport, camera_distance))
        .collect()
}

/// Radius and fill color of a vertex dot.
///
/// Both track the projection scale, so nearer vertices read larger and
/// brighter. Opacity saturates at 1.
pub fn vertex_dot(p: &Projected, style: &SceneStyle) -> (f32, [f32; 4]) {
    let radius = style.vertex_radius * p.scale as f32;
    let alpha = p.scale.clamp(0.0, 1.0) as f32;
    let [r, g, b, a] = style.vertex_color;
    (radius, [r, g, b, a * alpha])
}

fn point(p: &Projected) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}

/// Draw one complete frame. Edges go down first as a single stroke,
/// then the vertex dots on top.
pub(crate) fn draw_frame<S: Surface>(
    surface: &mut S,
    mesh: &Icosahedron,
    rotation: RotationState,
    viewport: &Viewport,
    config: &SceneConfig,
) {
    surface.clear();

    let projected = project_mesh(mesh, rotation, viewport, config.camera_distance);

    let segments: Vec<Segment> = mesh
        .edges()
        .iter()
        .map(|e| Segment {
            from: point(&projected[e.a]),
            to: point(&projected[e.b]),
        })
        .collect();
    surface.stroke_segments(
        &segments,
        &StrokeStyle {
            color: config.style.edge_color,
            width: config.style.edge_width,
        },
    );

    for p in &projected {
        let (radius, color) = vertex_dot(p, &config.style);
        surface.fill_circle(point(p), radius, color);
    }
}
