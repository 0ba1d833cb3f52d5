//! Icosahedron geometry: canonical vertices and distance-derived edges.
//!
//! Built once per scene and never mutated afterwards.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
