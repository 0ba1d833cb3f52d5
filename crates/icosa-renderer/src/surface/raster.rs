//! Software RGBA surface backed by an `image::RgbaImage`.
//!
//! Lines and circles use analytic distance coverage for a one-pixel
//! anti-aliased edge, blended source-over onto the existing pixels.

use std::path::Path;

use icosa_common::{Color, PixelSize};
use image::{ImageFormat, Rgba, RgbaImage};

use super::types::{Segment, StrokeStyle};
use super::Surface;
use crate::error::RendererError;

pub struct RasterSurface {
    image: RgbaImage,
    background: Color,
    /// Scratch mask so one stroke paints each pixel once.
    coverage: Vec<f32>,
}

/// Half-open pixel ranges `x0..x1`, `y0..y1`.
#[derive(Debug, Clone, Copy)]
struct PixelBounds {
    x0: u32,
    x1: u32,
    y0: u32,
    y1: u32,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width, height),
            background,
            coverage: vec![0.0; width as usize * height as usize],
        };
        surface.clear();
        surface
    }

    /// Reallocate at a new size and fill with the background.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
        self.coverage = vec![0.0; width as usize * height as usize];
        self.clear();
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// RGBA at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Write the current contents as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), RendererError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn bounds(&self, min: [f32; 2], max: [f32; 2]) -> Option<PixelBounds> {
        let (w, h) = self.image.dimensions();
        let x0 = (min[0].floor() as i64).max(0);
        let y0 = (min[1].floor() as i64).max(0);
        let x1 = (max[0].ceil() as i64 + 1).min(w as i64);
        let y1 = (max[1].ceil() as i64 + 1).min(h as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(PixelBounds {
            x0: x0 as u32,
            x1: x1 as u32,
            y0: y0 as u32,
            y1: y1 as u32,
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.image.width() as usize + x as usize
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> PixelSize {
        let (width, height) = self.image.dimensions();
        PixelSize::new(width, height)
    }

    fn clear(&mut self) {
        let bg = Rgba([
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        ]);
        for pixel in self.image.pixels_mut() {
            *pixel = bg;
        }
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: &StrokeStyle) {
        if segments.is_empty() || style.width <= 0.0 {
            return;
        }
        let half = style.width / 2.0;
        let reach = half + 1.0;
        // Hairlines fade instead of thinning below one pixel
        let intensity = style.width.min(1.0);

        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        for seg in segments {
            for p in [seg.from, seg.to] {
                min = [min[0].min(p[0] - reach), min[1].min(p[1] - reach)];
                max = [max[0].max(p[0] + reach), max[1].max(p[1] + reach)];
            }
        }
        let Some(area) = self.bounds(min, max) else {
            return;
        };

        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                let i = self.index(x, y);
                self.coverage[i] = 0.0;
            }
        }

        for seg in segments {
            let lo = [
                seg.from[0].min(seg.to[0]) - reach,
                seg.from[1].min(seg.to[1]) - reach,
            ];
            let hi = [
                seg.from[0].max(seg.to[0]) + reach,
                seg.from[1].max(seg.to[1]) + reach,
            ];
            let Some(b) = self.bounds(lo, hi) else {
                continue;
            };
            for y in b.y0..b.y1 {
                for x in b.x0..b.x1 {
                    let center = [x as f32 + 0.5, y as f32 + 0.5];
                    let d = distance_to_segment(center, seg.from, seg.to);
                    let cov = ((half + 0.5) - d).clamp(0.0, 1.0) * intensity;
                    let i = self.index(x, y);
                    if cov > self.coverage[i] {
                        self.coverage[i] = cov;
                    }
                }
            }
        }

        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                let cov = self.coverage[self.index(x, y)];
                if cov > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), style.color, cov);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: [f32; 4]) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let reach = radius + 1.0;
        let Some(b) = self.bounds(
            [center[0] - reach, center[1] - reach],
            [center[0] + reach, center[1] + reach],
        ) else {
            return;
        };
        let intensity = (2.0 * radius).min(1.0);

        for y in b.y0..b.y1 {
            for x in b.x0..b.x1 {
                let dx = x as f32 + 0.5 - center[0];
                let dy = y as f32 + 0.5 - center[1];
                let d = (dx * dx + dy * dy).sqrt();
                let cov = (radius + 0.5 - d).clamp(0.0, 1.0) * intensity;
                if cov > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), color, cov);
                }
            }
        }
    }
}

fn distance_to_segment(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let d = [b[0] - a[0], b[1] - a[1]];
    let len2 = d[0] * d[0] + d[1] * d[1];
    let t = if len2 <= f32::EPSILON {
        0.0
    } else {
        (((p[0] - a[0]) * d[0] + (p[1] - a[1]) * d[1]) / len2).clamp(0.0, 1.0)
    };
    let cx = a[0] + t * d[0] - p[0];
    let cy = a[1] + t * d[1] - p[1];
    (cx * cx + cy * cy).sqrt()
}

/// Straight-alpha source-over.
fn blend(pixel: &mut Rgba<u8>, color: [f32; 4], coverage: f32) {
    let sa = (color[3] * coverage).clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let dst = pixel.0.map(|c| c as f32 / 255.0);
    let da = dst[3];
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        pixel.0 = [0, 0, 0, 0];
        return;
    }
    let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    for c in 0..3 {
        let v = (color[c] * sa + dst[c] * da * (1.0 - sa)) / out_a;
        pixel.0[c] = to_u8(v);
    }
    pixel.0[3] = to_u8(out_a);
}

// =============================================================================
// Tests
// =============================================================================
