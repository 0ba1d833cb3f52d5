//! Geometry value types.

/// A point in object space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the origin.
    pub fn length(&self) -> f64 {
        self.distance(&Self::ORIGIN)
    }
}

/// An edge between two vertices, stored as indices with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(-2.0, 6.0, 3.0);
        assert!((p.distance(&q) - 5.0).abs() < 1e-12);
        assert!((q.distance(&p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn length_of_origin_is_zero() {
        assert_eq!(Point3::ORIGIN.length(), 0.0);
        assert_eq!(Point3::default(), Point3::ORIGIN);
    }
}
