//! A surface that records commands instead of rasterizing them.

use icosa_common::PixelSize;

use super::types::{DrawCommand, Segment, StrokeStyle};
use super::Surface;

/// Records the commands of the current frame.
///
/// `clear()` discards everything recorded so far, so after a tick the list
/// holds exactly one frame.
#[derive(Debug, Clone)]
pub struct DisplayList {
    size: PixelSize,
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: PixelSize::new(width, height),
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Change the reported size, as a window resize would.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = PixelSize::new(width, height);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `clear()` calls so far; one per drawn frame.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn circles(&self) -> impl Iterator<Item = (&[f32; 2], f32, &[f32; 4])> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, *radius, color)),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn size(&self) -> PixelSize {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke {
            segments: segments.to_vec(),
            style: *style,
        });
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_frame() {
        let mut list = DisplayList::new(10, 10);
        list.fill_circle([1.0, 1.0], 1.0, [1.0; 4]);
        list.clear();
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
        assert_eq!(list.clear_count(), 1);
    }

    #[test]
    fn records_in_order() {
        let mut list = DisplayList::new(10, 10);
        let style = StrokeStyle {
            color: [1.0, 1.0, 1.0, 0.5],
            width: 1.0,
        };
        list.clear();
        list.stroke_segments(
            &[Segment {
                from: [0.0, 0.0],
                to: [5.0, 5.0],
            }],
            &style,
        );
        list.fill_circle([2.0, 3.0], 2.5, [1.0; 4]);

        assert_eq!(list.commands().len(), 3);
        assert!(matches!(list.commands()[1], DrawCommand::Stroke { .. }));
        let (center, radius, _) = list.circles().next().unwrap();
        assert_eq!(*center, [2.0, 3.0]);
        assert_eq!(radius, 2.5);
    }

    #[test]
    fn set_size_changes_reported_size() {
        let mut list = DisplayList::new(800, 600);
        list.set_size(1600, 1200);
        assert_eq!(list.size(), PixelSize::new(1600, 1200));
    }
}
