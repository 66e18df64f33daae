//! Even-odd (ray-casting) containment test.
//!
//! A horizontal ray is cast from the query point towards +x; every ring edge
//! whose vertical span straddles the ray's height and whose crossing lies to
//! the right of the point toggles the verdict. An odd number of crossings
//! means inside.
//!
//! ## Boundary behavior
//!
//! Points exactly on the boundary are not special-cased. The straddle test
//! `(yi > y) != (yj > y)` is half-open and the crossing test `x < x_int` is
//! strict, so for an axis-aligned rectangle the left and bottom edges count
//! as inside and the right and top edges as outside. For the square
//! `[[0,0],[0,10],[10,10],[10,0]]`, `(0, 5)` and `(5, 0)` are inside while
//! `(10, 5)` and `(5, 10)` are outside. The result is a pure function of the
//! inputs and never varies between runs.

use crate::core::{GeoPoint, Ring};

/// Check whether `point` lies inside `ring` under the even-odd rule.
///
/// A ring with fewer than three vertices contains nothing.
#[must_use]
pub fn ring_contains(ring: &Ring, point: &GeoPoint) -> bool {
    if ring.is_degenerate() {
        return false;
    }

    let (x, y) = (point.x(), point.y());
    let mut inside = false;

    for (prev, curr) in ring.edges() {
        let (xj, yj) = (prev.x(), prev.y());
        let (xi, yi) = (curr.x(), curr.y());

        // Straddling guarantees yi != yj, so the division is safe.
        if (yi > y) != (yj > y) {
            let x_intersect = xj + (xi - xj) * (y - yj) / (yi - yj);
            if x < x_intersect {
                inside = !inside;
            }
        }
    }

    inside
}
