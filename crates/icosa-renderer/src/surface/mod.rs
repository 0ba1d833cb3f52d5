//! Drawing surfaces the scene renders into.
//!
//! [`Surface`] is the seam: a pixel-sized target that can be cleared,
//! stroked with a multi-segment path, and dotted with filled circles.

mod display_list;
mod raster;
mod types;

pub use display_list::*;
pub use raster::*;
pub use types::*;

use icosa_common::PixelSize;

pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> PixelSize;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Stroke all `segments` as a single path, so overlapping ends are
    /// painted once.
    fn stroke_segments(&mut self, segments: &[Segment], style: &StrokeStyle);

    /// Fill a circle. `color` is straight (non-premultiplied) RGBA in 0.0..=1.0.
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: [f32; 4]);
}
