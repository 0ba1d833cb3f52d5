//! Icosahedron construction.
//!
//! The 12 vertices are the corners of three mutually perpendicular golden
//! rectangles. Edges are not authored by hand: every vertex pair closer
//! than `edge_threshold × size` becomes an edge. With the canonical
//! coordinates the true edge length is exactly `2 × size` and the next
//! shortest pair distance is `2φ × size`, so any threshold strictly
//! between 2 and 2φ yields exactly the 30 icosahedron edges.

use super::types::{Edge, Point3};

/// The golden ratio φ = (1 + √5) / 2.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

const T: f64 = GOLDEN_RATIO;

/// Unit icosahedron vertices, before scaling.
#[rustfmt::skip]
pub const CANONICAL_VERTICES: [[f64; 3]; 12] = [
    [-1.0,  T,  0.0], [ 1.0,  T,  0.0], [-1.0, -T,  0.0], [ 1.0, -T,  0.0],
    [ 0.0, -1.0,  T], [ 0.0,  1.0,  T], [ 0.0, -1.0, -T], [ 0.0,  1.0, -T],
    [ T,  0.0, -1.0], [ T,  0.0,  1.0], [-T,  0.0, -1.0], [-T,  0.0,  1.0],
];

/// Default object-space scale.
pub const DEFAULT_SIZE: f64 = 180.0;

/// Default edge cutoff, as a multiple of the scale.
pub const EDGE_THRESHOLD: f64 = 2.1;

/// Edge length of the canonical (unscaled) icosahedron.
pub const CANONICAL_EDGE_LENGTH: f64 = 2.0;

pub const VERTEX_COUNT: usize = 12;
pub const EDGE_COUNT: usize = 30;

/// The immutable wireframe: 12 vertices and the edges between them.
#[derive(Debug, Clone)]
pub struct Icosahedron {
    vertices: Vec<Point3>,
    edges: Vec<Edge>,
    size: f64,
}

impl Icosahedron {
    /// Build at `size` with the default edge threshold.
    pub fn build(size: f64) -> Self {
        Self::build_with_threshold(size, EDGE_THRESHOLD)
    }

    /// Build at `size`, keeping every pair closer than `threshold × size`.
    pub fn build_with_threshold(size: f64, threshold: f64) -> Self {
        let vertices: Vec<Point3> = CANONICAL_VERTICES
            .iter()
            .map(|&[x, y, z]| Point3::new(x * size, y * size, z * size))
            .collect();

        let cutoff = threshold * size;
        let mut edges = Vec::with_capacity(EDGE_COUNT);
        for a in 0..vertices.len() {
            for b in (a + 1)..vertices.len() {
                if vertices[a].distance(&vertices[b]) < cutoff {
                    edges.push(Edge { a, b });
                }
            }
        }

        Self {
            vertices,
            edges,
            size,
        }
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Distance from the center to every vertex: `size × √(1 + φ²)`.
    pub fn circumradius(&self) -> f64 {
        self.size * (1.0 + GOLDEN_RATIO * GOLDEN_RATIO).sqrt()
    }
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::build(DEFAULT_SIZE)
    }
}

// =============================================================================
// Tests
// =============================================================================
