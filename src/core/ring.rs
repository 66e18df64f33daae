//! Polygon rings.
//!
//! A `Ring` is the ordered vertex list of a polygon boundary. The closing
//! edge is implicit: the last vertex need not repeat the first, and when it
//! does the zero-length closing edge is harmless to the containment test.

use serde::{Deserialize, Serialize};

use super::coord::GeoPoint;

/// Minimum number of vertices for a ring to enclose any area.
pub const MIN_RING_POINTS: usize = 3;

/// Ordered polygon boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring(Vec<GeoPoint>);

impl Ring {
    /// Create a ring from vertices.
    #[must_use]
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    /// Create a ring from `[x, y]` pairs (`x` = longitude, `y` = latitude).
    #[must_use]
    pub fn from_xy_pairs(pairs: &[[f64; 2]]) -> Self {
        Self(pairs.iter().copied().map(GeoPoint::from_xy).collect())
    }

    /// Vertices in order.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fewer than three vertices: encloses nothing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < MIN_RING_POINTS
    }

    /// Index of the first vertex with a non-finite coordinate.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|p| !p.is_finite())
    }

    /// Iterate over edges as `(previous, current)` vertex pairs, starting
    /// with the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&GeoPoint, &GeoPoint)> {
        let last = self.0.last();
        last.into_iter()
            .chain(self.0.iter())
            .zip(self.0.iter())
    }
}

impl From<Vec<GeoPoint>> for Ring {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}
