/// A straight line between two surface points, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

/// Stroke parameters for a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// RGBA color, each component 0.0..=1.0.
    pub color: [f32; 4],
    /// Line width in pixels.
    pub width: f32,
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Stroke {
        segments: Vec<Segment>,
        style: StrokeStyle,
    },
    Circle {
        center: [f32; 2],
        radius: f32,
        color: [f32; 4],
    },
}
